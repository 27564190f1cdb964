use ptr_sync_domain::search::annotation_field;
use ptr_sync_domain::{InventoryPage, InventoryRecord, PaginationCursor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Body of a `/inventory/search` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,

    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub offset: Option<PaginationCursor>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub ip: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl SearchResult {
    pub fn into_record(self, annotation: &str) -> InventoryRecord {
        let hostname = self
            .string_attr("host_name")
            .or_else(|| self.string_attr("hostname"))
            .unwrap_or_default();
        let annotation_value = self
            .string_attr(&annotation_field(annotation))
            .unwrap_or_default();

        InventoryRecord {
            ip: self.ip,
            hostname,
            annotation_value,
        }
    }

    fn string_attr(&self, key: &str) -> Option<String> {
        self.attributes
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl SearchResponse {
    pub fn into_page(self, annotation: &str) -> InventoryPage {
        InventoryPage::new(
            self.results
                .into_iter()
                .map(|r| r.into_record(annotation))
                .collect(),
            self.offset,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCursor {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_cursor<'de, D>(deserializer: D) -> Result<Option<PaginationCursor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCursor>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawCursor::Text(token) => PaginationCursor::new(token),
        RawCursor::Number(n) => PaginationCursor::new(n.to_string()),
    }))
}
