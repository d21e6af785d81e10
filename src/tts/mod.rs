//! Client, SpeechConfig, Model and VoiceSettings types.

pub mod client;

use crate::error::Result;
use crate::voice::Voice;
use async_trait::async_trait;
use futures_util::stream::BoxStream;

/// Ordered chunk sequence of a streaming synthesis call.
pub type AudioChunkStream = BoxStream<'static, Result<Vec<u8>>>;

/// Remote synthesis engine variant.
///
/// The tradeoffs between language coverage, latency and quality are the
/// service's concern; this just selects the `model_id` sent with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    /// English-only default model.
    #[default]
    MonolingualV1,
    /// High-quality multilingual model.
    MultilingualV2,
    /// Low-latency model, suited to streaming.
    TurboV2,
}

impl Model {
    pub fn id(&self) -> &'static str {
        match self {
            Model::MonolingualV1 => "eleven_monolingual_v1",
            Model::MultilingualV2 => "eleven_multilingual_v2",
            Model::TurboV2 => "eleven_turbo_v2",
        }
    }
}

/// Voice selection for a synthesis request.
///
/// The synthesis endpoint addresses voices by id. A `Name` selector is
/// resolved through a fresh listing right before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceSelector {
    Id(String),
    Name(String),
}

/// Synthesis-quality knobs, forwarded to the service as-is.
///
/// All floats are nominally in `[0, 1]` but no local validation is done;
/// the service is the sole authority on acceptance.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// Synthesis Config
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub voice: VoiceSelector,
    pub model: Model,
    /// Output encoding requested via the `output_format` query parameter,
    /// e.g. `mp3_44100_128` or `pcm_24000`.
    pub output_format: String,
    pub voice_settings: Option<VoiceSettings>,
}

impl SpeechConfig {
    pub fn new(voice: VoiceSelector, model: Model) -> Self {
        Self {
            voice,
            model,
            output_format: crate::constants::DEFAULT_OUTPUT_FORMAT.to_string(),
            voice_settings: None,
        }
    }

    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }
}

impl From<&Voice> for SpeechConfig {
    fn from(voice: &Voice) -> Self {
        Self::new(VoiceSelector::Id(voice.voice_id.clone()), Model::default())
    }
}

/// The remote synthesis boundary the demo runner drives.
///
/// [ElevenLabsClient](client::ElevenLabsClient) is the real implementation;
/// tests substitute fakes.
#[async_trait]
pub trait SpeechService {
    /// Fetch all voices available to the account. Fresh per call, not cached.
    async fn voices(&self) -> Result<Vec<Voice>>;

    /// Synthesize text to one complete audio buffer.
    async fn synthesize(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<client::SynthesizedAudio>;

    /// Synthesize text to an ordered sequence of audio chunks.
    async fn synthesize_stream(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<AudioChunkStream>;
}

fn build_request_body(text: &str, config: &SpeechConfig) -> serde_json::Value {
    let mut body = serde_json::json!({
        "text": text,
        "model_id": config.model.id(),
    });
    if let Some(settings) = &config.voice_settings {
        body["voice_settings"] = serde_json::json!(settings);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_text_and_model() {
        let config = SpeechConfig::new(
            VoiceSelector::Name("Rachel".to_string()),
            Model::TurboV2,
        );
        let body = build_request_body("Hello", &config);
        assert_eq!(body["text"], "Hello");
        assert_eq!(body["model_id"], "eleven_turbo_v2");
        assert!(body.get("voice_settings").is_none());
    }

    #[test]
    fn body_passes_settings_through_unvalidated() {
        // Out-of-range values are the service's problem, not ours.
        let settings = VoiceSettings {
            stability: 1.7,
            similarity_boost: -0.2,
            style: 0.2,
            use_speaker_boost: false,
        };
        let config = SpeechConfig::new(
            VoiceSelector::Id("abc123".to_string()),
            Model::MultilingualV2,
        )
        .with_settings(settings);
        let body = build_request_body("Hola", &config);
        assert_eq!(body["model_id"], "eleven_multilingual_v2");
        let sent = &body["voice_settings"];
        assert!((sent["stability"].as_f64().unwrap() - 1.7).abs() < 1e-6);
        assert!((sent["similarity_boost"].as_f64().unwrap() + 0.2).abs() < 1e-6);
        assert_eq!(sent["use_speaker_boost"], false);
    }

    #[test]
    fn speech_config_from_voice_uses_id_and_default_model() {
        let voice = crate::voice::Voice {
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            name: "Rachel".to_string(),
            category: None,
            description: None,
        };
        let config = SpeechConfig::from(&voice);
        assert_eq!(
            config.voice,
            VoiceSelector::Id("21m00Tcm4TlvDq8ikWAM".to_string())
        );
        assert_eq!(config.model, Model::MonolingualV1);
        assert_eq!(config.output_format, "mp3_44100_128");
        assert!(config.voice_settings.is_none());
    }
}
