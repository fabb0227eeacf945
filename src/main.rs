use clap::Parser;
use customer_join::app::{build_customer_service, serve};
use customer_join::utils::error::ServiceError;
use customer_join::utils::{logger, validation::Validate};
use customer_join::{seed_customers, CliConfig, ConfigProvider, TomlConfig};

fn exit_with(e: &ServiceError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn load_toml(path: &str) -> TomlConfig {
    tracing::info!("📁 Loading configuration from: {}", path);
    let config = TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);
    tracing::info!("Starting customer-service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => Box::new(load_toml(path)),
        None => {
            if let Err(e) = cli.validate() {
                exit_with(&e);
            }
            Box::new(cli.clone())
        }
    };

    let customers = seed_customers();
    tracing::info!("Customer store loaded with {} customer(s)", customers.len());

    let app = build_customer_service(config.as_ref(), customers)?;
    serve(app, config.port()).await?;

    Ok(())
}
