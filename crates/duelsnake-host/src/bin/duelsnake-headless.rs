use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use duelsnake_classic::config::DuelConfig;
use duelsnake_host::script::Script;
use duelsnake_host::{KeyBindings, MatchOptions, run_match};

/// Value of `--name=value` anywhere on the command line.
fn arg_value(name: &str) -> Option<String> {
    let prefix = format!("--{name}=");
    std::env::args()
        .skip(1)
        .find_map(|a| a.strip_prefix(&prefix).map(String::from))
}

fn has_flag(name: &str) -> bool {
    let flag = format!("--{name}");
    std::env::args().skip(1).any(|a| a == flag)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = DuelConfig::load();
    if let Some(seed) = arg_value("seed").and_then(|s| s.parse::<u64>().ok()) {
        config.seed = Some(seed);
    }

    let max_secs = arg_value("max-secs")
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(120.0);

    let script = match arg_value("script") {
        Some(path) => match Script::load(&path) {
            Ok(script) => script,
            Err(e) => {
                tracing::error!("Failed to load script: {e}");
                return ExitCode::FAILURE;
            },
        },
        None => Script::default(),
    };

    let result = run_match(MatchOptions {
        config,
        bindings: KeyBindings::load(),
        script,
        max_secs,
        dump_frame: has_flag("dump-frame"),
    });

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!("Failed to encode result: {e}");
            ExitCode::FAILURE
        },
    }
}
