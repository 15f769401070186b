//! Address publication.
//!
//! The resolved addresses are written as one comma-separated line (no
//! trailing newline) so a later container can read them straight into an
//! environment variable.

use std::fs;
use std::io;
use std::path::Path;

/// Render addresses the way they are published.
pub fn format_addresses(addresses: &[String]) -> String {
    addresses.join(",")
}

/// Write addresses to `path`, creating parent directories as needed.
pub fn write_addresses(path: &Path, addresses: &[String]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_addresses(addresses))
}
