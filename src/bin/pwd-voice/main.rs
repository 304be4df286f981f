//! Interactive password strength meter with spoken feedback.

mod player;
mod ui;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pwd_voice::{
    blacklist_path, Blacklist, BlacklistError, EngineKind, Session, SessionEvent,
    StrengthClassifier, Update, VoiceConfig, VoiceState,
};
use tracing_subscriber::EnvFilter;

use crate::player::Player;
use crate::ui::Action;

#[derive(Parser, Debug)]
#[command(name = "pwd-voice", version, about = "Password strength meter with spoken feedback")]
struct Cli {
    /// Voice engine: google, espeak or off
    #[arg(long, env = "PWD_VOICE_ENGINE", default_value = "google")]
    engine: EngineKind,

    /// Language of the spoken feedback
    #[arg(long, env = "PWD_VOICE_LANG", default_value = pwd_voice::DEFAULT_LANG)]
    lang: String,

    /// Timeout for online speech requests, in seconds
    #[arg(long, env = "PWD_VOICE_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// espeak-ng binary for the offline engine
    #[arg(long, env = "PWD_VOICE_ESPEAK_BIN")]
    espeak_bin: Option<PathBuf>,

    /// ffmpeg binary for the offline engine
    #[arg(long, env = "PWD_VOICE_FFMPEG_BIN")]
    ffmpeg_bin: Option<PathBuf>,

    /// Audio player used for playback
    #[arg(long, env = "PWD_VOICE_PLAYER")]
    player: Option<PathBuf>,

    /// Common password list
    #[arg(long, env = "PWD_BLACKLIST_PATH")]
    blacklist: Option<PathBuf>,

    /// Directory where voice feedback is saved
    #[arg(long, env = "PWD_VOICE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Play voice feedback as soon as a new password is assessed
    #[arg(long, env = "PWD_VOICE_AUTOPLAY", default_value_t = true, action = clap::ArgAction::Set)]
    autoplay: bool,
}

struct App {
    session: Session,
    player: Option<Player>,
    output_dir: PathBuf,
    autoplay: bool,
    clipboard: Option<arboard::Clipboard>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// An explicitly configured list must load; the default one is optional.
fn load_classifier(explicit: Option<&Path>) -> Result<StrengthClassifier> {
    if let Some(path) = explicit {
        let blacklist = Blacklist::from_path(path)
            .with_context(|| format!("cannot load blacklist {}", path.display()))?;
        return Ok(StrengthClassifier::with_blacklist(blacklist));
    }

    match Blacklist::from_path(blacklist_path()) {
        Ok(blacklist) => Ok(StrengthClassifier::with_blacklist(blacklist)),
        Err(BlacklistError::FileNotFound(path)) => {
            tracing::warn!("No blacklist at {:?}, common passwords will not be flagged", path);
            Ok(StrengthClassifier::new())
        }
        Err(e) => Err(e).context("cannot load default blacklist"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let classifier = load_classifier(cli.blacklist.as_deref())?;

    let voice = VoiceConfig {
        engine: cli.engine,
        lang: cli.lang,
        timeout: Duration::from_secs(cli.timeout_secs),
        espeak_bin: cli.espeak_bin,
        ffmpeg_bin: cli.ffmpeg_bin,
    };
    let synthesizer = voice
        .build()
        .with_context(|| format!("cannot start the {} voice engine", voice.engine))?;

    let player = if synthesizer.is_some() {
        Player::resolve(cli.player.as_deref())?
    } else {
        None
    };

    tracing::info!(engine = %voice.engine, lang = %voice.lang, "session starting");

    let mut app = App {
        session: Session::new(classifier, synthesizer, voice.lang),
        player,
        output_dir: cli.output_dir,
        autoplay: cli.autoplay,
        clipboard: None,
    };

    ui::banner();
    run(&mut app)
}

fn run(app: &mut App) -> Result<()> {
    loop {
        let Some(password) = ui::prompt_password()? else {
            return Ok(());
        };
        let update = app.session.handle(SessionEvent::PasswordChanged(password));
        tracing::debug!(?update, "password event handled");
        ui::render(&app.session.view());
        if should_autoplay(update, app.autoplay, app.session.voice(), app.player.is_some()) {
            play_voice(app);
        }

        loop {
            let Some(action) = ui::choose_action(&app.session, app.player.is_some())? else {
                return Ok(());
            };
            match action {
                Action::CheckAnother => break,
                Action::CopySuggestion => copy_suggestion(app),
                Action::NewSuggestion => {
                    app.session.handle(SessionEvent::RegenerateSuggestion);
                    ui::render(&app.session.view());
                }
                Action::PlayVoice => play_voice(app),
                Action::SaveVoice => save_voice(app),
                Action::Refresh => {
                    app.session.handle(SessionEvent::Refresh);
                    ui::render(&app.session.view());
                    break;
                }
                Action::Quit => return Ok(()),
            }
        }
    }
}

/// Best effort: failures are reported and the session continues.
fn copy_suggestion(app: &mut App) {
    let Some(suggestion) = app.session.suggestion().map(str::to_string) else {
        return;
    };

    if app.clipboard.is_none() {
        match arboard::Clipboard::new() {
            Ok(clipboard) => app.clipboard = Some(clipboard),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {}", e);
                ui::warn(&format!("Clipboard unavailable: {}", e));
                return;
            }
        }
    }

    if let Some(clipboard) = app.clipboard.as_mut() {
        match clipboard.set_text(suggestion) {
            Ok(()) => ui::success("Suggested password copied to clipboard!"),
            Err(e) => {
                tracing::warn!("clipboard write failed: {}", e);
                ui::warn(&format!("Failed to copy to clipboard: {}", e));
            }
        }
    }
}

/// Only a fresh assessment with a ready artifact plays on its own.
fn should_autoplay(update: Update, autoplay: bool, voice: &VoiceState, has_player: bool) -> bool {
    autoplay && has_player && update == Update::Assessed && matches!(voice, VoiceState::Ready(_))
}

fn play_voice(app: &App) {
    let (Some(player), VoiceState::Ready(artifact)) = (&app.player, app.session.voice()) else {
        return;
    };
    if let Err(e) = player.play(artifact.path()) {
        tracing::warn!("playback failed: {}", e);
        ui::warn(&format!("Playback failed: {}", e));
    }
}

fn save_voice(app: &App) {
    let Some(artifact) = app.session.voice().artifact() else {
        return;
    };
    match artifact.save_to(&app.output_dir) {
        Ok(path) => ui::success(&format!("Voice feedback saved to {}", path.display())),
        Err(e) => {
            tracing::warn!("saving voice feedback failed: {}", e);
            ui::warn(&format!("Could not save voice feedback: {}", e));
        }
    }
}
