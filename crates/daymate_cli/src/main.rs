//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daymate_core` linkage.
//! - Surface the effective app configuration for quick local sanity checks.

use daymate_core::AppConfig;
use std::process::ExitCode;

/// Optional override file next to the binary; defaults apply when absent.
const CONFIG_FILE: &str = "daymate.toml";

fn main() -> ExitCode {
    println!("daymate_core ping={}", daymate_core::ping());
    println!("daymate_core version={}", daymate_core::core_version());

    let config = match AppConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("daymate_cli config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "app name={:?} version={} encryption={} cache_limit_bytes={}",
        config.app.name,
        config.app.version,
        config.storage.enable_encryption,
        config.storage.max_cache_size_bytes
    );
    println!(
        "features ai_chat={} tasks={} calendar={} reminders={} offline={} push={}",
        config.features.ai_chat,
        config.features.task_management,
        config.features.calendar,
        config.features.reminders,
        config.features.offline_mode,
        config.features.push_notifications
    );

    ExitCode::SUCCESS
}
