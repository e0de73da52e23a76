// navdash platform paths for Linux
// Data: ~/.local/share/navdash

use std::env;
use std::path::PathBuf;

/// Returns the data directory for navdash on Linux.
/// Uses `$XDG_DATA_HOME/navdash` if set, otherwise `~/.local/share/navdash`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("navdash")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("navdash")
    }
}
