//! Locating external voice tools.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::VoiceError;

/// Searches `PATH` for an executable named `name`.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    find_in(&paths, name)
}

fn find_in(paths: &OsString, name: &str) -> Option<PathBuf> {
    std::env::split_paths(paths).find_map(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", name));
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}

/// Resolves a tool path.
///
/// Priority:
/// 1. `explicit` (a CLI flag)
/// 2. Environment variable `env_var`
/// 3. The first of `names` found on `PATH`
///
/// An explicit or environment path that is not a file is an error rather
/// than a reason to fall back to `PATH`.
pub fn resolve_tool(
    explicit: Option<&Path>,
    env_var: &'static str,
    names: &[&str],
) -> Result<PathBuf, VoiceError> {
    let tool = names.first().copied().unwrap_or("tool").to_string();

    let configured = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(env_var).map(PathBuf::from));

    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path);
        }
        #[cfg(feature = "tracing")]
        tracing::error!("Configured {} path {:?} is not a file", tool, path);
        return Err(VoiceError::ToolNotFound { tool, env: env_var });
    }

    names
        .iter()
        .find_map(|name| find_on_path(name))
        .ok_or(VoiceError::ToolNotFound { tool, env: env_var })
}
