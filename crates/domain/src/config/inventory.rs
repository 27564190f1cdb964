use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventoryConfig {
    /// User annotation column that stores the resolved hostname.
    #[serde(default = "default_annotation")]
    pub annotation: String,

    #[serde(default = "default_scope")]
    pub scope: String,

    /// Records requested per search page.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Pause between pages, in seconds.
    #[serde(default = "default_throttle_secs")]
    pub throttle_secs: u64,

    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
            scope: default_scope(),
            search_limit: default_search_limit(),
            throttle_secs: default_throttle_secs(),
            csv_path: default_csv_path(),
        }
    }
}

fn default_annotation() -> String {
    "FQDN".to_string()
}

fn default_scope() -> String {
    "Default".to_string()
}

fn default_search_limit() -> u32 {
    20
}

fn default_throttle_secs() -> u64 {
    2
}

fn default_csv_path() -> String {
    "annotations.csv".to_string()
}
