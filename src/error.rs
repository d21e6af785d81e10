use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "API key is required. Set {} environment variable or pass api_key parameter",
        crate::constants::API_KEY_ENV
    )]
    MissingApiKey,
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("voice not found: {0}")]
    VoiceNotFound(String),
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("audio output error: {0}")]
    AudioStreamError(#[from] rodio::StreamError),
    #[error("audio play error: {0}")]
    AudioPlayError(#[from] rodio::PlayError),
    #[error("audio decode error: {0}")]
    AudioDecodeError(#[from] rodio::decoder::DecoderError),
}

impl Error {
    /// Configuration errors are fatal to the whole run. Everything else is
    /// caught at the boundary of the demo operation that raised it.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingApiKey)
    }
}
