//! TTS Client module

use {
    super::{AudioChunkStream, SpeechConfig, SpeechService, VoiceSelector, build_request_body},
    crate::{
        constants,
        error::{Error, Result},
        voice::{Voice, VoicesResponse, find_voice_by_name},
    },
    async_trait::async_trait,
    futures_util::{StreamExt, TryStreamExt},
};

/// ElevenLabs API client.
///
/// Holds the credential and connection configuration for its lifetime;
/// read-only after construction. Each remote call is attempted exactly once,
/// with no retries and no local timeouts.
#[derive(Debug)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, constants::BASE_URL)
    }

    /// Create a client reading the API key from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var(constants::API_KEY_ENV).unwrap_or_default())
    }

    /// Create a client against a non-default service endpoint.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = resolve_api_key(api_key.into())?;
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Get all voices available to the account.
    pub async fn get_voices_list(&self) -> Result<Vec<Voice>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, constants::VOICES_PATH))
            .header(constants::API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let response = check_status(response).await?;
        let listing: VoicesResponse = response.json().await?;
        Ok(listing.voices)
    }

    /// Synthesize text to speech, returning the complete audio buffer.
    pub async fn synthesize(&self, text: &str, config: &SpeechConfig) -> Result<SynthesizedAudio> {
        let response = self.send_tts(text, config, false).await?;
        let audio_bytes = response.bytes().await?.to_vec();
        Ok(SynthesizedAudio {
            audio_format: config.output_format.clone(),
            audio_bytes,
        })
    }

    /// Synthesize text to speech, returning audio chunks as they arrive.
    pub async fn synthesize_stream(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<AudioChunkStream> {
        let response = self.send_tts(text, config, true).await?;
        Ok(response
            .bytes_stream()
            .map_ok(|chunk| chunk.to_vec())
            .map_err(Error::from)
            .boxed())
    }

    async fn send_tts(
        &self,
        text: &str,
        config: &SpeechConfig,
        streaming: bool,
    ) -> Result<reqwest::Response> {
        let voice_id = self.resolve_voice_id(&config.voice).await?;
        let suffix = if streaming { constants::STREAM_SUFFIX } else { "" };
        let url = format!(
            "{}{}/{}{}",
            self.base_url,
            constants::TTS_PATH,
            voice_id,
            suffix
        );
        let response = self
            .http
            .post(url)
            .header(constants::API_KEY_HEADER, &self.api_key)
            .query(&[("output_format", config.output_format.as_str())])
            .json(&build_request_body(text, config))
            .send()
            .await?;
        check_status(response).await
    }

    /// The synthesis endpoint wants a voice id; a name selector costs one
    /// extra listing call.
    async fn resolve_voice_id(&self, selector: &VoiceSelector) -> Result<String> {
        match selector {
            VoiceSelector::Id(id) => Ok(id.clone()),
            VoiceSelector::Name(name) => {
                let voices = self.get_voices_list().await?;
                find_voice_by_name(&voices, name)
                    .map(|voice| voice.voice_id.clone())
                    .ok_or_else(|| Error::VoiceNotFound(name.clone()))
            }
        }
    }
}

#[async_trait]
impl SpeechService for ElevenLabsClient {
    async fn voices(&self) -> Result<Vec<Voice>> {
        self.get_voices_list().await
    }

    async fn synthesize(&self, text: &str, config: &SpeechConfig) -> Result<SynthesizedAudio> {
        ElevenLabsClient::synthesize(self, text, config).await
    }

    async fn synthesize_stream(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<AudioChunkStream> {
        ElevenLabsClient::synthesize_stream(self, text, config).await
    }
}

/// Synthesized Audio
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_format: String,
    pub audio_bytes: Vec<u8>,
}

fn resolve_api_key(api_key: String) -> Result<String> {
    if api_key.trim().is_empty() {
        Err(Error::MissingApiKey)
    } else {
        Ok(api_key)
    }
}

/// Surface non-2xx responses verbatim as [Error::Api].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}
