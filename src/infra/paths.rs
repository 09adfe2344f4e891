// src/infra/paths.rs — Config path resolution
//
// EVOPROMPT_HOME overrides the config directory. When unset, config lives
// under ~/.evoprompt/.

use std::path::{Path, PathBuf};

/// Returns the EVOPROMPT_HOME override, if set.
fn evoprompt_home() -> Option<PathBuf> {
    std::env::var_os("EVOPROMPT_HOME").map(PathBuf::from)
}

fn resolve_config_dir(home_override: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(home) = home_override {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".evoprompt"))
}

/// Configuration directory: $EVOPROMPT_HOME/ or ~/.evoprompt/
///
/// `None` only when neither the override nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(evoprompt_home())
}

pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = PathBuf::from("/tmp/evoprompt-home");
        assert_eq!(resolve_config_dir(Some(dir.clone())), Some(dir));
    }

    #[test]
    fn test_default_dir_is_dot_evoprompt() {
        if let Some(dir) = resolve_config_dir(None) {
            assert!(dir.ends_with(".evoprompt"));
        }
    }

    #[test]
    fn test_config_file_in_dir() {
        assert_eq!(
            config_file_in(Path::new("/etc/evoprompt")),
            PathBuf::from("/etc/evoprompt/config.toml")
        );
    }
}
