use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".birthday_core";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const CONFIG_BACKUP_DIR: &str = "backups";
const STORE_FILE: &str = "local_store.json";

/// Resolves filesystem locations for configuration and local state.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.birthday_core`.
    ///
    /// `BIRTHDAY_CORE_HOME` overrides the location, which tests rely on.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os("BIRTHDAY_CORE_HOME") {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Uses the provided root when present, otherwise [`PathResolver::base_dir`].
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }

    pub fn config_backup_dir_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_BACKUP_DIR)
    }

    /// Path of the JSON object file backing the local key-value store.
    pub fn store_file_in(base: &Path) -> PathBuf {
        base.join(STORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_at_base() {
        let base = PathBuf::from("/tmp/bday");
        assert_eq!(
            PathResolver::config_file_in(&base),
            PathBuf::from("/tmp/bday/config/config.json")
        );
        assert_eq!(
            PathResolver::config_backup_dir_in(&base),
            PathBuf::from("/tmp/bday/config/backups")
        );
        assert_eq!(
            PathResolver::store_file_in(&base),
            PathBuf::from("/tmp/bday/local_store.json")
        );
    }

    #[test]
    fn explicit_root_wins() {
        let root = PathBuf::from("/srv/custom");
        assert_eq!(PathResolver::resolve_base(Some(root.clone())), root);
    }
}
