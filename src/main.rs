use actix_web::{web, App, HttpServer};

mod api;
mod cli;
mod config;
mod error;
mod metrics;
mod models;
mod services;
mod state;

use api::get_metrics;
use cli::{CommandArgs, USAGE};
use config::ExporterConfig;
use state::new_state;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse_args();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let state = new_state(&config)?;
    let bind_address = config.bind_address();

    print_banner(&config);
    log::info!(
        "Starting exporter on {}/metrics for server {}",
        bind_address,
        state.server_name()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .route("/metrics", web::get().to(get_metrics))
    })
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}

fn print_banner(config: &ExporterConfig) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      WebLogic Exporter v{:<34}║", env!("CARGO_PKG_VERSION"));
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", config.address, config.port);
    println!();
    println!("📋 Monitoring:");
    println!("  Admin server   {}", config.admin_url);
    println!("  Server name    {}", config.server_name);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    /metrics                - Prometheus metrics");
    println!("═══════════════════════════════════════════════════════════");
}
