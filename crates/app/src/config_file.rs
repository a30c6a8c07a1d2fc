//! Optional simulation-config override file. The desktop shell starts from
//! the built-in defaults; pointing `NIGHTWATCH_CONFIG` at a JSON file
//! overrides whichever fields it names.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use core::SimConfig;

pub const CONFIG_ENV_VAR: &str = "NIGHTWATCH_CONFIG";

pub fn load(path: &Path) -> io::Result<SimConfig> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Resolves the config for this run. A missing env var means defaults; a
/// set env var pointing at an unreadable or invalid file is an error the
/// shell reports and exits on, rather than silently ignoring the override.
pub fn load_from_env() -> io::Result<SimConfig> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load(Path::new(&path)),
        None => Ok(SimConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "guard_count": 7, "fov_range": 200.0 }"#).expect("write");

        let config = load(&path).expect("load");
        assert_eq!(config.guard_count, 7);
        assert_eq!(config.fov_range, 200.0);
        assert_eq!(config.tile_size, SimConfig::default().tile_size);
    }

    #[test]
    fn invalid_json_is_rejected_as_invalid_data() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "guard_count = 7").expect("write");

        let err = load(&path).expect_err("malformed file must not load");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_surfaces_the_io_error() {
        let err = load(Path::new("/nonexistent/config.json")).expect_err("must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
