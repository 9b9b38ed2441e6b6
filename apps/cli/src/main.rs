mod commands;
mod config;
mod main_lib;
mod render;

use config::Config;
use main_lib::{build_services, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = commands::parse_command(&args)?;
    let services = build_services()?;
    commands::run(command, &services, &config).await
}
