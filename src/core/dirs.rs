use crate::core::error::{Result, SandboxError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "git-sandbox";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or(SandboxError::DirectoryNotFound { kind: "config" })
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".cache"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Caches")),
        _ => dirs::cache_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or(SandboxError::DirectoryNotFound { kind: "cache" })
}

/// Per-directory session location: `<cache>/git-sandbox/<md5 of dir>/session.json`
pub fn default_session_path(working_dir: &Path) -> Result<PathBuf> {
    let dir_hash = format!(
        "{:x}",
        md5::compute(working_dir.to_string_lossy().as_bytes())
    );
    log::debug!(
        "default_session_path: working_dir = {working_dir:?}, hash = {dir_hash}"
    );
    Ok(get_cache_directory()?.join(dir_hash).join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_path_is_stable_per_directory() -> Result<()> {
        let a = default_session_path(Path::new("/work/project"))?;
        let b = default_session_path(Path::new("/work/project"))?;
        let c = default_session_path(Path::new("/work/other"))?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.ends_with("session.json"));
        Ok(())
    }
}
