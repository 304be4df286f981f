//! Password strength meter with spoken feedback
//!
//! This library scores passwords, composes user-facing feedback, narrates
//! it through a speech synthesizer and suggests generated replacements.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-voice` terminal frontend
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to the common password list
//!   (default: `./assets/blacklist.txt`)
//! - `PWD_VOICE_ESPEAK_BIN`, `PWD_VOICE_FFMPEG_BIN`: Tool paths for the
//!   offline voice engine (default: looked up on `PATH`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_voice::{Blacklist, Session, SessionEvent, SessionView, StrengthClassifier, VoiceConfig};
//! use secrecy::SecretString;
//!
//! let classifier = match Blacklist::load() {
//!     Ok(blacklist) => StrengthClassifier::with_blacklist(blacklist),
//!     Err(_) => StrengthClassifier::new(),
//! };
//! let synthesizer = VoiceConfig::default().build().expect("voice engine");
//! let mut session = Session::new(classifier, synthesizer, "en");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! session.handle(SessionEvent::PasswordChanged(password));
//!
//! if let SessionView::Report { assessment, suggestion, .. } = session.view() {
//!     println!("Strength: {} ({:.2})", assessment.feedback.headline(), assessment.score);
//!     println!("Try instead: {}", suggestion);
//! }
//! ```

mod assessment;
mod blacklist;
mod classifier;
mod config;
mod feedback;
mod generator;
mod sections;
mod session;
pub mod voice;

// Public API
pub use assessment::PasswordAssessment;
pub use blacklist::{blacklist_path, Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use classifier::{
    classify, count_special_chars, entropy_bits, CharacterProfile, ScoreResult, StrengthClassifier,
};
pub use config::{ConfigError, EngineKind, VoiceConfig, DEFAULT_LANG, DEFAULT_TIMEOUT};
pub use feedback::{
    compose, feedback_for, ColorToken, FeedbackBundle, Tier, MEDIUM_THRESHOLD, STRONG_THRESHOLD,
};
pub use generator::{generate_strong_password, generate_strong_password_with, ALPHABET, LENGTH_RANGE};
pub use sections::{CharClass, Finding, MIN_LENGTH};
pub use session::{Session, SessionEvent, SessionView, Update, VoiceState, PROMPT};
pub use voice::{SpeechSynthesizer, VoiceArtifact, VoiceError};
