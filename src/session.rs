//! Interactive session state.
//!
//! A [`Session`] holds the latest assessment, the current suggestion and at
//! most one voice artifact. Frontends feed it [`SessionEvent`]s and render
//! [`Session::view`].
//!
//! # Defaults
//!
//! | field        | initial value                          |
//! |--------------|----------------------------------------|
//! | assessment   | none (prompt shown)                    |
//! | suggestion   | none                                   |
//! | voice        | `Idle`, or `Disabled` without an engine |

use secrecy::{ExposeSecret, SecretString};

use crate::assessment::PasswordAssessment;
use crate::classifier::StrengthClassifier;
use crate::feedback::FeedbackBundle;
use crate::generator::generate_strong_password;
use crate::voice::{SpeechSynthesizer, VoiceArtifact};

/// Shown while there is nothing to assess.
pub const PROMPT: &str = "Enter a password to check its strength.";

/// State of the spoken feedback for the current assessment.
#[derive(Debug)]
pub enum VoiceState {
    /// Nothing synthesized yet.
    Idle,
    /// No synthesizer configured.
    Disabled,
    Ready(VoiceArtifact),
    /// Synthesis failed; the text assessment is still valid.
    Unavailable(String),
}

impl VoiceState {
    pub fn artifact(&self) -> Option<&VoiceArtifact> {
        match self {
            VoiceState::Ready(artifact) => Some(artifact),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SessionEvent {
    PasswordChanged(SecretString),
    RegenerateSuggestion,
    Refresh,
}

/// What a handled event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Unchanged,
    Cleared,
    Assessed,
    SuggestionRegenerated,
    Reset,
}

/// What a frontend should render.
#[derive(Debug)]
pub enum SessionView<'a> {
    Prompt(&'static str),
    Report {
        assessment: &'a PasswordAssessment,
        suggestion: &'a str,
        voice: &'a VoiceState,
    },
}

pub struct Session {
    classifier: StrengthClassifier,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    lang: String,
    assessment: Option<PasswordAssessment>,
    suggestion: Option<String>,
    voice: VoiceState,
}

impl Session {
    /// Creates a session in its initial state. `synthesizer: None` disables
    /// spoken feedback.
    pub fn new(
        classifier: StrengthClassifier,
        synthesizer: Option<Box<dyn SpeechSynthesizer>>,
        lang: impl Into<String>,
    ) -> Self {
        let voice = Self::initial_voice(synthesizer.is_some());
        Self {
            classifier,
            synthesizer,
            lang: lang.into(),
            assessment: None,
            suggestion: None,
            voice,
        }
    }

    fn initial_voice(enabled: bool) -> VoiceState {
        if enabled { VoiceState::Idle } else { VoiceState::Disabled }
    }

    pub fn handle(&mut self, event: SessionEvent) -> Update {
        match event {
            SessionEvent::PasswordChanged(password) => self.on_password_changed(password),
            SessionEvent::RegenerateSuggestion => self.on_regenerate_suggestion(),
            SessionEvent::Refresh => self.on_refresh(),
        }
    }

    fn on_password_changed(&mut self, password: SecretString) -> Update {
        if password.expose_secret().is_empty() {
            if self.assessment.is_none() {
                return Update::Unchanged;
            }
            self.clear();
            return Update::Cleared;
        }

        if self.assessment.as_ref().is_some_and(|a| a.is_for(&password)) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password unchanged, skipping assessment");
            return Update::Unchanged;
        }

        let assessment = PasswordAssessment::assess(&self.classifier, password);

        #[cfg(feature = "tracing")]
        tracing::info!(
            tier = %assessment.tier,
            score = assessment.score,
            findings = assessment.findings.len(),
            "password assessed"
        );

        self.suggestion = Some(generate_strong_password());
        self.voice = self.narrate(&assessment.feedback);
        self.assessment = Some(assessment);
        Update::Assessed
    }

    fn on_regenerate_suggestion(&mut self) -> Update {
        if self.assessment.is_none() {
            return Update::Unchanged;
        }
        self.suggestion = Some(generate_strong_password());
        Update::SuggestionRegenerated
    }

    fn on_refresh(&mut self) -> Update {
        self.clear();
        #[cfg(feature = "tracing")]
        tracing::info!("session reset");
        Update::Reset
    }

    fn clear(&mut self) {
        self.assessment = None;
        self.suggestion = None;
        self.voice = Self::initial_voice(self.synthesizer.is_some());
    }

    /// Synthesizes the narration for `feedback`, releasing the previous
    /// artifact first.
    fn narrate(&mut self, feedback: &FeedbackBundle) -> VoiceState {
        let Some(synthesizer) = &self.synthesizer else {
            return VoiceState::Disabled;
        };

        self.voice = VoiceState::Idle;

        match synthesizer.synthesize(&feedback.narration(), &self.lang) {
            Ok(artifact) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("{} voice feedback at {:?}", synthesizer.name(), artifact.path());
                VoiceState::Ready(artifact)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{} voice feedback unavailable: {}", synthesizer.name(), e);
                VoiceState::Unavailable(e.to_string())
            }
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        match (&self.assessment, &self.suggestion) {
            (Some(assessment), Some(suggestion)) => SessionView::Report {
                assessment,
                suggestion,
                voice: &self.voice,
            },
            _ => SessionView::Prompt(PROMPT),
        }
    }

    pub fn assessment(&self) -> Option<&PasswordAssessment> {
        self.assessment.as_ref()
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn voice(&self) -> &VoiceState {
        &self.voice
    }

    pub fn voice_enabled(&self) -> bool {
        self.synthesizer.is_some()
    }
}
