use chrono::Utc;
use clap::Parser;
use customer_join::app::{build_order_service, serve};
use customer_join::seed_orders;
use customer_join::utils::{logger, validation::validate_range};

#[derive(Parser)]
#[command(name = "order-service")]
#[command(about = "Serves the most recent order of a customer")]
struct Args {
    #[arg(long, default_value = "8081")]
    port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(args.verbose, args.json_logs);
    tracing::info!("Starting order-service");

    if let Err(e) = validate_range("port", args.port, 1, u16::MAX) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 訂單時間以啟動時間為基準
    let app = build_order_service(seed_orders(Utc::now()));
    serve(app, args.port).await?;

    Ok(())
}
