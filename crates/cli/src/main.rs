use clap::Parser;
use ptr_sync_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ptr-sync")]
#[command(version)]
#[command(about = "Annotate unnamed inventory hosts with their reverse DNS names")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Inventory API base URL
    #[arg(long, env = "TETRATION_API_URL")]
    url: Option<String>,

    /// Path to the JSON API credential file
    #[arg(long, value_name = "FILE", env = "TETRATION_API_CRED_PATH")]
    credential: Option<String>,

    /// User annotation field that tracks the hostname
    #[arg(long, env = "TETRATION_HOST_NAME_USER_ANNOTATION")]
    annotation: Option<String>,

    /// Target scope for DNS resolution
    #[arg(long, env = "TETRATION_SCOPE_NAME")]
    scope: Option<String>,

    /// Results per inventory search page
    #[arg(
        long,
        env = "TETRATION_SEARCH_LIMIT",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    limit: Option<u32>,

    /// DNS server for PTR lookups (repeatable or comma separated)
    #[arg(long = "dns-server", env = "DNS_SERVERS", value_delimiter = ',')]
    dns_servers: Option<Vec<String>>,

    /// PTR lookup timeout in seconds
    #[arg(long, env = "DNS_TIMEOUT")]
    dns_timeout: Option<u64>,

    /// Pause between inventory pages in seconds
    #[arg(long, env = "TETRATION_THROTTLE_SECS")]
    throttle: Option<u64>,

    /// Where the uploaded annotation CSV is written
    #[arg(long, value_name = "FILE", env = "ANNOTATION_CSV_PATH")]
    csv_path: Option<String>,

    /// Verify the API TLS certificate
    #[arg(
        long,
        env = "TETRATION_VERIFY_TLS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    verify_tls: Option<bool>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long, env = "PTR_SYNC_LOG")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            url: self.url.clone(),
            credentials_path: self.credential.clone(),
            verify_tls: self.verify_tls,
            annotation: self.annotation.clone(),
            scope: self.scope.clone(),
            search_limit: self.limit,
            throttle_secs: self.throttle,
            csv_path: self.csv_path.clone(),
            dns_servers: self.dns_servers.clone(),
            dns_timeout: self.dns_timeout,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging, cli.log_level.is_some());

    info!("Starting ptr-sync v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;
    let use_cases = di::UseCases::new(&config, &services);

    let summary = use_cases.reconcile.execute().await.map_err(|e| {
        error!(error = %e, "Reconciliation aborted");
        anyhow::anyhow!(e)
    })?;

    if summary.uploads_failed > 0 {
        error!(
            failed = summary.uploads_failed,
            "Some annotation uploads were rejected"
        );
    }

    info!("ptr-sync finished");
    Ok(())
}
