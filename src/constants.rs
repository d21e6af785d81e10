pub static BASE_URL: &str = "https://api.elevenlabs.io";
pub static VOICES_PATH: &str = "/v1/voices";
pub static TTS_PATH: &str = "/v1/text-to-speech";
pub static STREAM_SUFFIX: &str = "/stream";

pub static API_KEY_HEADER: &str = "xi-api-key";
pub static API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Default output encoding requested from the service. The service decides
/// the actual codec; bytes are passed through untouched.
pub static DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";
