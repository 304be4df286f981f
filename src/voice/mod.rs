//! Voice feedback
//!
//! A [`SpeechSynthesizer`] turns feedback text into a [`VoiceArtifact`], a
//! temporary MP3 file deleted when the artifact is dropped.

mod espeak;
mod google;
mod tools;

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub use espeak::{EspeakTts, ESPEAK_BIN_ENV, FFMPEG_BIN_ENV};
pub use google::{chunk_text, GoogleTts, DEFAULT_ENDPOINT, MAX_CHUNK_CHARS};
pub use tools::{find_on_path, resolve_tool};

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Nothing to synthesize")]
    EmptyText,
    #[error("Audio I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Speech request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Speech service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Speech service returned no audio")]
    EmptyAudio,
    #[error("`{tool}` not found: install it or set {env}")]
    ToolNotFound { tool: String, env: &'static str },
    #[error("`{tool}` failed: {detail}")]
    ToolFailed { tool: String, detail: String },
}

/// Converts text into a playable audio artifact.
pub trait SpeechSynthesizer {
    /// Short engine name for logs and status lines.
    fn name(&self) -> &str;

    fn synthesize(&self, text: &str, lang: &str) -> Result<VoiceArtifact, VoiceError>;
}

/// A synthesized MP3 living in a uniquely named temporary file.
#[derive(Debug)]
pub struct VoiceArtifact {
    file: NamedTempFile,
}

impl VoiceArtifact {
    pub const MIME: &'static str = "audio/mpeg";
    pub const DOWNLOAD_NAME: &'static str = "password_feedback.mp3";

    /// Creates an empty artifact file for an encoder to fill.
    pub fn create() -> Result<Self, VoiceError> {
        let file = tempfile::Builder::new()
            .prefix("pwd-voice-")
            .suffix(".mp3")
            .tempfile()?;
        Ok(Self { file })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VoiceError> {
        let mut artifact = Self::create()?;
        artifact.file.write_all(bytes)?;
        artifact.file.flush()?;
        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Size of the audio file in bytes, read from disk.
    pub fn size(&self) -> Result<u64, VoiceError> {
        Ok(std::fs::metadata(self.path())?.len())
    }

    /// Copies the audio to `dir/password_feedback.mp3` and returns that path.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, VoiceError> {
        let target = dir.join(Self::DOWNLOAD_NAME);
        std::fs::copy(self.path(), &target)?;
        Ok(target)
    }
}
