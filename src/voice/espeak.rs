//! Offline synthesis: `espeak-ng` renders WAV, `ffmpeg` encodes it to MP3.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::tools::resolve_tool;
use super::{SpeechSynthesizer, VoiceArtifact, VoiceError};

pub const ESPEAK_BIN_ENV: &str = "PWD_VOICE_ESPEAK_BIN";
pub const FFMPEG_BIN_ENV: &str = "PWD_VOICE_FFMPEG_BIN";

#[derive(Debug, Clone)]
pub struct EspeakTts {
    espeak: PathBuf,
    ffmpeg: PathBuf,
}

impl EspeakTts {
    /// Uses the given binaries as-is.
    pub fn new(espeak: PathBuf, ffmpeg: PathBuf) -> Self {
        Self { espeak, ffmpeg }
    }

    /// Resolves both binaries from flags, environment or `PATH`.
    ///
    /// Fails at startup when either tool is missing, so a session never
    /// discovers it halfway through.
    pub fn locate(espeak: Option<&Path>, ffmpeg: Option<&Path>) -> Result<Self, VoiceError> {
        let espeak = resolve_tool(espeak, ESPEAK_BIN_ENV, &["espeak-ng", "espeak"])?;
        let ffmpeg = resolve_tool(ffmpeg, FFMPEG_BIN_ENV, &["ffmpeg"])?;

        #[cfg(feature = "tracing")]
        tracing::info!("espeak engine using {:?} and {:?}", espeak, ffmpeg);

        Ok(Self::new(espeak, ffmpeg))
    }
}

fn check(tool: &Path, output: Output) -> Result<(), VoiceError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(VoiceError::ToolFailed {
        tool: tool.display().to_string(),
        detail: format!("{} {}", output.status, stderr.trim()).trim().to_string(),
    })
}

impl SpeechSynthesizer for EspeakTts {
    fn name(&self) -> &str {
        "espeak"
    }

    fn synthesize(&self, text: &str, lang: &str) -> Result<VoiceArtifact, VoiceError> {
        if text.trim().is_empty() {
            return Err(VoiceError::EmptyText);
        }

        let wav = tempfile::Builder::new()
            .prefix("pwd-voice-")
            .suffix(".wav")
            .tempfile()?;

        let output = Command::new(&self.espeak)
            .arg("-v")
            .arg(lang)
            .arg("-w")
            .arg(wav.path())
            .arg(text)
            .output()?;
        check(&self.espeak, output)?;

        let artifact = VoiceArtifact::create()?;
        let output = Command::new(&self.ffmpeg)
            .args(["-hide_banner", "-loglevel", "error", "-y", "-i"])
            .arg(wav.path())
            .args(["-f", "mp3"])
            .arg(artifact.path())
            .output()?;
        check(&self.ffmpeg, output)?;

        if artifact.size()? == 0 {
            return Err(VoiceError::EmptyAudio);
        }

        Ok(artifact)
    }
}
