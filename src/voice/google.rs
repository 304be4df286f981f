//! Online synthesis through the Google Translate speech endpoint.

use std::time::Duration;

use reqwest::blocking::Client;

use super::{SpeechSynthesizer, VoiceArtifact, VoiceError};

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects longer `q` parameters.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Synthesizes MP3 speech with one GET per text chunk.
#[derive(Debug, Clone)]
pub struct GoogleTts {
    client: Client,
    endpoint: String,
}

impl GoogleTts {
    pub fn new(timeout: Duration) -> Result<Self, VoiceError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, VoiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn chunk_url(&self, chunk: &str, lang: &str, idx: usize, total: usize) -> String {
        format!(
            "{}?ie=UTF-8&client=tw-ob&ttsspeed=1&tl={}&total={}&idx={}&textlen={}&q={}",
            self.endpoint,
            urlencoding::encode(lang),
            total,
            idx,
            chunk.chars().count(),
            urlencoding::encode(chunk),
        )
    }
}

impl SpeechSynthesizer for GoogleTts {
    fn name(&self) -> &str {
        "google"
    }

    fn synthesize(&self, text: &str, lang: &str) -> Result<VoiceArtifact, VoiceError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(VoiceError::EmptyText);
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, lang, idx, chunks.len());
            let response = self.client.get(&url).send()?;
            let status = response.status();
            if !status.is_success() {
                #[cfg(feature = "tracing")]
                tracing::warn!("Speech chunk {}/{} rejected: {}", idx + 1, chunks.len(), status);
                return Err(VoiceError::Status(status));
            }
            audio.extend_from_slice(&response.bytes()?);
        }

        if audio.is_empty() {
            return Err(VoiceError::EmptyAudio);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Synthesized {} bytes in {} chunk(s)", audio.len(), chunks.len());

        VoiceArtifact::from_bytes(&audio)
    }
}

/// Splits text into pieces of at most `max_chars` code points.
///
/// Splits happen at whitespace; a single word longer than `max_chars` is cut
/// at character boundaries. Surrounding whitespace is dropped.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
