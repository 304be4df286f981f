//! Voice configuration resolved at startup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::voice::{EspeakTts, GoogleTts, SpeechSynthesizer, VoiceError};

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown voice engine `{0}` (expected google, espeak or off)")]
    UnknownEngine(String),
}

/// Which synthesizer narrates the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    #[default]
    Google,
    Espeak,
    Off,
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" | "gtts" => Ok(EngineKind::Google),
            "espeak" | "espeak-ng" => Ok(EngineKind::Espeak),
            "off" | "none" => Ok(EngineKind::Off),
            other => Err(ConfigError::UnknownEngine(other.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Google => write!(f, "google"),
            EngineKind::Espeak => write!(f, "espeak"),
            EngineKind::Off => write!(f, "off"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    pub engine: EngineKind,
    pub lang: String,
    /// Per-request timeout for online engines.
    pub timeout: Duration,
    pub espeak_bin: Option<PathBuf>,
    pub ffmpeg_bin: Option<PathBuf>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            lang: DEFAULT_LANG.to_string(),
            timeout: DEFAULT_TIMEOUT,
            espeak_bin: None,
            ffmpeg_bin: None,
        }
    }
}

impl VoiceConfig {
    /// Builds the configured synthesizer; `Ok(None)` when voice is off.
    ///
    /// Missing tools surface here, before any session starts.
    pub fn build(&self) -> Result<Option<Box<dyn SpeechSynthesizer>>, VoiceError> {
        let synthesizer: Box<dyn SpeechSynthesizer> = match self.engine {
            EngineKind::Off => return Ok(None),
            EngineKind::Google => Box::new(GoogleTts::new(self.timeout)?),
            EngineKind::Espeak => Box::new(EspeakTts::locate(
                self.espeak_bin.as_deref(),
                self.ffmpeg_bin.as_deref(),
            )?),
        };
        Ok(Some(synthesizer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_from_str() {
        assert_eq!("google".parse::<EngineKind>(), Ok(EngineKind::Google));
        assert_eq!(" ESPEAK ".parse::<EngineKind>(), Ok(EngineKind::Espeak));
        assert_eq!("none".parse::<EngineKind>(), Ok(EngineKind::Off));
        assert_eq!(
            "piper".parse::<EngineKind>(),
            Err(ConfigError::UnknownEngine("piper".to_string()))
        );
    }

    #[test]
    fn test_engine_display_round_trips() {
        for kind in [EngineKind::Google, EngineKind::Espeak, EngineKind::Off] {
            assert_eq!(kind.to_string().parse::<EngineKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_defaults() {
        let config = VoiceConfig::default();
        assert_eq!(config.engine, EngineKind::Google);
        assert_eq!(config.lang, "en");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_build_off() {
        let config = VoiceConfig {
            engine: EngineKind::Off,
            ..VoiceConfig::default()
        };
        assert!(config.build().unwrap().is_none());
    }

    #[test]
    fn test_build_google() {
        let synth = VoiceConfig::default().build().unwrap().expect("synthesizer");
        assert_eq!(synth.name(), "google");
    }

    #[test]
    fn test_build_espeak_with_missing_tool_fails_fast() {
        let config = VoiceConfig {
            engine: EngineKind::Espeak,
            espeak_bin: Some(PathBuf::from("/nonexistent/espeak-ng")),
            ..VoiceConfig::default()
        };
        assert!(matches!(config.build(), Err(VoiceError::ToolNotFound { .. })));
    }
}
