//! Audio playback through an external player.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use pwd_voice::voice::find_on_path;

/// Players tried in order when none is configured.
const KNOWN_PLAYERS: &[&str] = &["mpg123", "ffplay", "mpv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    path: PathBuf,
    args: Vec<&'static str>,
}

impl Player {
    pub fn new(path: PathBuf) -> Self {
        let args = player_args(&path);
        Self { path, args }
    }

    /// Uses `explicit` when given (it must exist), otherwise the first known
    /// player on `PATH`. `Ok(None)` means playback is not offered.
    pub fn resolve(explicit: Option<&Path>) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            let path = if path.is_file() {
                path.to_path_buf()
            } else {
                path.to_str()
                    .and_then(find_on_path)
                    .with_context(|| format!("audio player {} not found", path.display()))?
            };
            return Ok(Some(Self::new(path)));
        }

        let found = KNOWN_PLAYERS.iter().find_map(|name| find_on_path(name));
        if found.is_none() {
            tracing::info!("no audio player found, playback disabled");
        }
        Ok(found.map(Self::new))
    }

    /// Plays `audio` and waits for the player to exit.
    pub fn play(&self, audio: &Path) -> Result<()> {
        let status = Command::new(&self.path)
            .args(&self.args)
            .arg(audio)
            .status()
            .with_context(|| format!("cannot run {}", self.path.display()))?;
        if !status.success() {
            bail!("{} exited with {}", self.path.display(), status);
        }
        Ok(())
    }
}

/// Quiet, windowless flags for the players we know.
fn player_args(path: &Path) -> Vec<&'static str> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match name {
        "mpg123" => vec!["-q"],
        "ffplay" => vec!["-nodisp", "-autoexit", "-loglevel", "quiet"],
        "mpv" => vec!["--no-video", "--really-quiet"],
        _ => Vec::new(),
    }
}
