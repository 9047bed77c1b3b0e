use std::process::ExitCode;

use tracing::{error, info};

use feedback_relay::{Config, RelayError, WebServer};

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration
    let config = match Config::load_with_env(&path) {
        Ok(config) => config,
        Err(RelayError::Io(e)) => {
            eprintln!("Failed to read {path}: {e}");
            eprintln!("Using default configuration with environment overrides.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    if let Err(e) = feedback_relay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        feedback_relay::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    info!("Feedback relay starting");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let server = match WebServer::from_config(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
