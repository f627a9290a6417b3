use std::path::PathBuf;
use std::sync::OnceLock;

/// Platform directory layout for meditimer.
///
/// On Linux this follows the XDG Base Directory Specification:
///   Config:  $XDG_CONFIG_HOME/meditimer  (~/.config/meditimer)
///   Data:    $XDG_DATA_HOME/meditimer    (~/.local/share/meditimer)
///
/// On macOS both live under ~/Library/Application Support/meditimer.
/// Resolved base paths are cached so lookup only happens once.

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

const APP_DIR: &str = "meditimer";

/// Root data directory: $XDG_DATA_HOME/meditimer
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}

/// Root config directory: $XDG_CONFIG_HOME/meditimer
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default location of the ambient tracks: <data_dir>/sounds
pub fn sounds_dir() -> PathBuf {
    data_dir().join("sounds")
}

/// Log file written while the TUI owns the terminal.
pub fn log_file() -> PathBuf {
    data_dir().join("meditimer.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with("meditimer"));
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        assert!(config_dir().ends_with("meditimer"));
    }

    #[test]
    fn config_file_structure() {
        assert!(config_file().ends_with("meditimer/config.toml"));
    }

    #[test]
    fn sounds_dir_under_data_dir() {
        assert!(sounds_dir().starts_with(data_dir()));
        assert!(sounds_dir().ends_with("sounds"));
    }

    #[test]
    fn log_file_under_data_dir() {
        assert!(log_file().ends_with("meditimer/meditimer.log"));
    }
}
