use std::env;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "PAGEWISE_CONFIG_PATH";

const CONFIG_FILE_CANDIDATES: [&str; 3] = ["pagewise.yml", "pagewise.yaml", "pagewise.toml"];

/// Resolves the config file to read.
///
/// The env override wins even when the file does not exist yet; otherwise the
/// first candidate present in the working directory is used.
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let cwd = env::current_dir().ok()?;
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|name| cwd.join(name))
        .find(|candidate| candidate.exists())
}
