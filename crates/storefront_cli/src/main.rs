//! CLI entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `storefront_core` linkage.
//! - Replay scripted viewer sessions against a console host.
//!
//! Usage:
//! - `storefront_cli` prints ping/version.
//! - `storefront_cli replay <script.json> [config.json]`
//! - `storefront_cli feed <listing.json> [config.json]`
//!
//! Set `STOREFRONT_LOG_DIR` to an absolute path to enable file logging.

mod console;
mod script;

use chrono::Local;
use console::ConsoleHost;
use script::{run_step, settle, Step};
use std::fs;
use std::process::ExitCode;
use storefront_core::{
    default_log_level, encode_batch, init_logging, FeedResponse, Viewer, ViewerConfig,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = maybe_init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let result = match args.first().map(String::as_str) {
        None => {
            println!("storefront_core ping={}", storefront_core::ping());
            println!("storefront_core version={}", storefront_core::core_version());
            Ok(())
        }
        Some("replay") => with_path(&args, replay),
        Some("feed") => with_path(&args, feed),
        Some(other) => Err(format!("unknown command `{other}`; expected replay|feed")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn maybe_init_logging() -> Result<(), String> {
    match std::env::var("STOREFRONT_LOG_DIR") {
        Ok(dir) => init_logging(default_log_level(), &dir),
        Err(_) => Ok(()),
    }
}

fn with_path(
    args: &[String],
    command: fn(&str, ViewerConfig) -> Result<(), String>,
) -> Result<(), String> {
    let path = args
        .get(1)
        .ok_or_else(|| format!("`{}` needs a file path", args[0]))?;
    let config = match args.get(2) {
        Some(config_path) => load_config(config_path)?,
        None => ViewerConfig::default(),
    };
    command(path, config)
}

fn load_config(path: &str) -> Result<ViewerConfig, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid config `{path}`: {err}"))
}

fn new_viewer(config: ViewerConfig) -> Result<Viewer<ConsoleHost>, String> {
    Viewer::new(ConsoleHost::default(), config).map_err(|err| err.to_string())
}

fn replay(path: &str, config: ViewerConfig) -> Result<(), String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    let steps: Vec<Step> =
        serde_json::from_str(&raw).map_err(|err| format!("invalid script `{path}`: {err}"))?;

    let mut viewer = new_viewer(config)?;
    viewer.start();
    for step in steps {
        run_step(&mut viewer, step);
    }
    Ok(())
}

fn feed(path: &str, config: ViewerConfig) -> Result<(), String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    let mut viewer = new_viewer(config)?;
    viewer.start();

    let messages = match serde_json::from_str::<FeedResponse>(&raw) {
        Ok(response) => encode_batch(&response, Local::now().date_naive()),
        Err(err) => {
            eprintln!("invalid listing `{path}`: {err}");
            vec![storefront_core::failure_message()]
        }
    };
    for message in messages {
        run_step(&mut viewer, Step::Message(message));
    }
    settle(&mut viewer);
    run_step(&mut viewer, Step::Shutdown(None));
    Ok(())
}
