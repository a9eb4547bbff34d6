use tracing::{error, info};

use msgboard::{Config, ConsoleSink};

fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml").and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default_with_env()
        }
    };

    // Initialize logging
    if let Err(e) = msgboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        msgboard::logging::init_console_only(&config.logging.level);
    }

    info!("msgboard - {} board(s) configured", config.boards.len());

    if let Err(e) = msgboard::demo::run(&config, &mut ConsoleSink) {
        error!("Walkthrough aborted: {e}");
        std::process::exit(1);
    }
}
