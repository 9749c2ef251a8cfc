// linkshelf platform paths
// Config and data directories per OS, with environment overrides.
//
// - Linux: $XDG_CONFIG_HOME/linkshelf, $XDG_DATA_HOME/linkshelf
// - macOS: ~/Library/Application Support/linkshelf
// - Windows: %APPDATA%/linkshelf

use std::env;
use std::path::PathBuf;

/// Overrides the configuration directory when set.
pub const CONFIG_DIR_ENV: &str = "LINKSHELF_CONFIG_DIR";
/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "LINKSHELF_DATA_DIR";

const APP_DIR: &str = "linkshelf";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

fn env_dir(name: &str) -> Option<PathBuf> {
    env::var(name).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = env_dir(CONFIG_DIR_ENV) {
        return dir;
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env_dir("XDG_CONFIG_HOME")
            .unwrap_or_else(|| home_dir().join(".config"))
            .join(APP_DIR)
    }
}

/// Returns the directory holding the SQLite database.
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = env_dir(DATA_DIR_ENV) {
        return dir;
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env_dir("XDG_DATA_HOME")
            .unwrap_or_else(|| home_dir().join(".local").join("share"))
            .join(APP_DIR)
    }
}
