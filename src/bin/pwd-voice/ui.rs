//! Terminal rendering and prompts.

use std::fmt;

use anyhow::Result;
use console::{style, Style};
use inquire::{InquireError, Password, PasswordDisplayMode, Select};
use pwd_voice::{
    ColorToken, PasswordAssessment, Session, SessionView, VoiceArtifact, VoiceState,
};
use secrecy::SecretString;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckAnother,
    CopySuggestion,
    NewSuggestion,
    PlayVoice,
    SaveVoice,
    Refresh,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::CheckAnother => "🔐 Check another password",
            Action::CopySuggestion => "📋 Copy suggested password",
            Action::NewSuggestion => "🎲 Suggest another password",
            Action::PlayVoice => "🎙️ Play voice feedback",
            Action::SaveVoice => "🔊 Save voice feedback",
            Action::Refresh => "🔄 Refresh",
            Action::Quit => "🚪 Quit",
        };
        f.write_str(text)
    }
}

pub fn banner() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  🔒 PASSWORD STRENGTH METER WITH VOICE   ║");
    println!("╚══════════════════════════════════════════╝");
}

/// `None` when the user cancels with Esc or Ctrl-C.
fn cancelled<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn prompt_password() -> Result<Option<SecretString>> {
    let input = Password::new("Enter your password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt();
    Ok(cancelled(input)?.map(|pwd| SecretString::new(pwd.into())))
}

/// Actions that make sense for the current session state.
pub fn available_actions(session: &Session, can_play: bool) -> Vec<Action> {
    let mut actions = vec![Action::CheckAnother];
    if session.assessment().is_some() {
        actions.push(Action::CopySuggestion);
        actions.push(Action::NewSuggestion);
        if session.voice().artifact().is_some() {
            if can_play {
                actions.push(Action::PlayVoice);
            }
            actions.push(Action::SaveVoice);
        }
        actions.push(Action::Refresh);
    }
    actions.push(Action::Quit);
    actions
}

pub fn choose_action(session: &Session, can_play: bool) -> Result<Option<Action>> {
    let actions = available_actions(session, can_play);
    cancelled(Select::new("What next?", actions).prompt())
}

fn tier_style(color: ColorToken) -> Style {
    match color {
        ColorToken::Red => Style::new().red().bold(),
        ColorToken::Orange => Style::new().color256(214).bold(),
        ColorToken::Green => Style::new().green().bold(),
    }
}

/// Bar of `BAR_WIDTH` cells, filled in proportion to `percent`.
pub fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn render_assessment(assessment: &PasswordAssessment) {
    let feedback = &assessment.feedback;
    let tint = tier_style(feedback.color);
    let profile = &assessment.profile;

    println!();
    println!("Strength: {}", tint.apply_to(feedback.headline()));
    println!("🛡️ Length: {}", profile.length);
    println!("🔑 Contains Letters: {}", yes_no(profile.has_letters()));
    println!("🔢 Contains Numbers: {}", yes_no(profile.has_digits()));
    println!("🔣 Contains Special Characters: {}", yes_no(profile.has_special()));
    println!(
        "{} {:>3}%",
        tint.apply_to(progress_bar(assessment.progress_percent())),
        assessment.progress_percent()
    );

    println!();
    println!("{}", style("📝 Feedback").bold());
    println!("{}", feedback.advice);
    for finding in &assessment.findings {
        println!("  • {}", style(finding).dim());
    }
}

fn render_voice(voice: &VoiceState) {
    match voice {
        VoiceState::Ready(artifact) => {
            println!();
            println!("{}", style("🎙️ Voice Feedback").bold());
            let size = artifact
                .size()
                .map(|n| format!("{} bytes", n))
                .unwrap_or_else(|_| "size unknown".to_string());
            println!(
                "Ready as {} ({}, {})",
                VoiceArtifact::DOWNLOAD_NAME,
                VoiceArtifact::MIME,
                size
            );
        }
        VoiceState::Unavailable(reason) => {
            println!();
            warn(&format!("Voice feedback unavailable: {}", reason));
        }
        VoiceState::Idle | VoiceState::Disabled => {}
    }
}

pub fn render(view: &SessionView<'_>) {
    match view {
        SessionView::Prompt(message) => {
            println!("{} {}", style("ℹ").cyan(), message);
        }
        SessionView::Report { assessment, suggestion, voice } => {
            render_assessment(assessment);
            println!();
            println!("{}", style("🔑 Suggested Strong Password").bold());
            println!("{}", style(suggestion).cyan());
            render_voice(voice);
            println!();
        }
    }
}

pub fn success(message: &str) {
    println!("{} {}", style("✅").green(), message);
}

pub fn warn(message: &str) {
    println!("{} {}", style("⚠️").yellow(), style(message).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwd_voice::{SessionEvent, SpeechSynthesizer, StrengthClassifier, VoiceError};

    struct StubSynth;

    impl SpeechSynthesizer for StubSynth {
        fn name(&self) -> &str {
            "stub"
        }

        fn synthesize(&self, _text: &str, _lang: &str) -> Result<VoiceArtifact, VoiceError> {
            VoiceArtifact::from_bytes(b"ID3")
        }
    }

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_progress_bar_width() {
        assert_eq!(progress_bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(100), "█".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(50).chars().filter(|&c| c == '█').count(), 15);
        assert_eq!(progress_bar(255).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_actions_before_input() {
        let session = Session::new(StrengthClassifier::new(), None, "en");
        assert_eq!(
            available_actions(&session, true),
            vec![Action::CheckAnother, Action::Quit]
        );
    }

    #[test]
    fn test_actions_with_voice() {
        let mut session = Session::new(StrengthClassifier::new(), Some(Box::new(StubSynth)), "en");
        session.handle(SessionEvent::PasswordChanged(secret("password")));

        let actions = available_actions(&session, false);
        assert!(actions.contains(&Action::SaveVoice));
        assert!(!actions.contains(&Action::PlayVoice));
        assert!(available_actions(&session, true).contains(&Action::PlayVoice));
    }

    #[test]
    fn test_actions_without_voice() {
        let mut session = Session::new(StrengthClassifier::new(), None, "en");
        session.handle(SessionEvent::PasswordChanged(secret("password")));

        let actions = available_actions(&session, true);
        assert!(actions.contains(&Action::CopySuggestion));
        assert!(actions.contains(&Action::Refresh));
        assert!(!actions.contains(&Action::SaveVoice));
    }
}
