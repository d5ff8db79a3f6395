//! Config file discovery

use std::path::{Path, PathBuf};

/// Find a config file by walking up from the current directory, then
/// checking the global config directory.
///
/// Search order:
/// 1. Current directory and parent directories (walking up to root)
/// 2. Global config at `<config_dir>/<app_dir>/<filename>`
pub fn find_config_file(filename: &str, app_dir: &str) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let found = find_config_file_from(&cwd, filename)
        .or_else(|| global_config_file(dirs::config_dir()?, filename, app_dir));

    match &found {
        Some(path) => tracing::debug!("Found {} at {}", filename, path.display()),
        None => tracing::debug!("No {} found", filename),
    }
    found
}

/// Walk up from `start` looking for `filename`. No global fallback.
pub fn find_config_file_from(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

fn global_config_file(config_dir: PathBuf, filename: &str, app_dir: &str) -> Option<PathBuf> {
    let global_path = config_dir.join(app_dir).join(filename);
    global_path.is_file().then_some(global_path)
}
