use log::debug;
use std::env;

const ENV_PREFIX: &str = "MP4_FALLBACK_";

fn relevant_env() -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = env::vars()
        .filter(|(key, _)| key.to_ascii_uppercase().starts_with(ENV_PREFIX))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Debug-log the MP4_FALLBACK_* environment so a misbehaving run can be
/// reconstructed from its log output.
pub fn log_relevant_env() {
    let entries = relevant_env();
    if entries.is_empty() {
        return;
    }
    debug!("Environment snapshot ({} entries):", entries.len());
    for (key, value) in entries {
        let display_value = if value.len() > 200 {
            format!("{}…", &value[..200])
        } else {
            value
        };
        debug!("  {} = {}", key, display_value);
    }
}
