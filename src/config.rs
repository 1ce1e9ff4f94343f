use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::renditions::TargetQuality;

pub const CONFIG_ENV_VAR: &str = "MP4_FALLBACK_CONFIG";

/// Settings a configuration file may provide. CLI arguments that were
/// explicitly passed always win over these.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub quality: Option<TargetQuality>,
    pub target_height: Option<u32>,
}

/// Where the loaded configuration file came from.
#[derive(Debug)]
pub enum ConfigSource {
    Cli(PathBuf),
    Env(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Cli(path) | ConfigSource::Env(path) | ConfigSource::Default(path) => path,
        }
    }
}

pub fn load(path_override: Option<&Path>) -> Result<Option<(Config, ConfigSource)>> {
    let mut candidates = Vec::new();

    if let Some(path) = path_override {
        candidates.push(ConfigSource::Cli(path.to_path_buf()));
    } else {
        if let Some(env_path) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            candidates.push(ConfigSource::Env(PathBuf::from(env_path)));
        }
        candidates.extend(
            default_config_candidates()
                .into_iter()
                .map(ConfigSource::Default),
        );
    }

    for candidate in candidates {
        let path = candidate.path();
        if path.as_os_str().is_empty() || !path.exists() {
            continue;
        }

        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read configuration file at {}",
                path.display()
            )
        })?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid configuration file at {}", path.display()))?;

        return Ok(Some((config, candidate)));
    }

    Ok(None)
}

fn default_config_candidates() -> Vec<PathBuf> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();

    let mut push_unique = |path: PathBuf, out: &mut Vec<PathBuf>| {
        if !path.as_os_str().is_empty() && seen.insert(path.clone()) {
            out.push(path);
        }
    };

    if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME").filter(|val| !val.is_empty()) {
        let mut path = PathBuf::from(xdg_config);
        path.push("mp4-fallback");
        path.push("config.toml");
        push_unique(path, &mut out);
    }

    if let Some(home) = detect_home_dir() {
        let mut path = home.join(".config");
        path.push("mp4-fallback");
        path.push("config.toml");
        push_unique(path, &mut out);

        push_unique(home.join("mp4-fallback.toml"), &mut out);

        let mut nested = home.join("mp4-fallback");
        nested.push("config.toml");
        push_unique(nested, &mut out);
    }

    if let Ok(current_dir) = env::current_dir() {
        push_unique(current_dir.join("mp4-fallback.toml"), &mut out);
        push_unique(current_dir.join("mp4-fallback").join("config.toml"), &mut out);
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(parent) = exe_path.parent() {
            push_unique(parent.join("mp4-fallback.toml"), &mut out);
            push_unique(parent.join("mp4-fallback").join("config.toml"), &mut out);
        }
    }

    push_unique(PathBuf::from("/etc/mp4-fallback/config.toml"), &mut out);
    push_unique(PathBuf::from("/usr/local/etc/mp4-fallback/config.toml"), &mut out);

    out
}

fn detect_home_dir() -> Option<PathBuf> {
    if let Some(home) = env::var_os("HOME").filter(|val| !val.is_empty()) {
        return Some(PathBuf::from(home));
    }

    #[cfg(unix)]
    {
        use std::ffi::CStr;

        unsafe {
            let uid = libc::getuid();
            let pwd = libc::getpwuid(uid);
            if pwd.is_null() {
                return None;
            }
            let dir_ptr = (*pwd).pw_dir;
            if dir_ptr.is_null() {
                return None;
            }
            if let Ok(path_str) = CStr::from_ptr(dir_ptr).to_str() {
                if !path_str.is_empty() {
                    return Some(PathBuf::from(path_str));
                }
            }
        }
    }

    None
}
