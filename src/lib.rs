//! This library is a small demo client of the **ElevenLabs Text-to-Speech** API.
//! You can use it to list the voices of an account, synthesize text to speech
//! with default or custom voice settings, and stream synthesized audio for
//! incremental playback.
//!
//! # How to use
//! 1. You need an API key from <https://elevenlabs.io/>. Pass it explicitly to
//!    [ElevenLabsClient::new](tts::client::ElevenLabsClient::new) or export it
//!    as `ELEVENLABS_API_KEY` and use
//!    [ElevenLabsClient::from_env](tts::client::ElevenLabsClient::from_env).
//!    An empty or missing key is a fatal configuration error; no remote call
//!    is attempted.
//!
//! 2. You need a [SpeechConfig](tts::SpeechConfig) to configure a synthesis
//!    call: which voice (by id or name), which [Model](tts::Model), and
//!    optional [VoiceSettings](tts::VoiceSettings). You can convert a listed
//!    [Voice](voice::Voice) to a [SpeechConfig](tts::SpeechConfig) simply.
//!    For example:
//!     ```no_run
//!     use elevenlabs_tts::tts::{SpeechConfig, client::ElevenLabsClient};
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let client = ElevenLabsClient::from_env().unwrap();
//!         let voices = client.get_voices_list().await.unwrap();
//!         let config = SpeechConfig::from(&voices[0]);
//!     }
//!     ```
//!
//! 3. Synthesize text to speech.
//!     ### Whole buffer
//!     [synthesize](tts::client::ElevenLabsClient::synthesize) returns a
//!     [SynthesizedAudio](tts::client::SynthesizedAudio) holding the complete
//!     audio bytes, ready to be written to a file or handed to a
//!     [playback sink](playback::AudioSink).
//!     ```no_run
//!     use elevenlabs_tts::tts::{Model, SpeechConfig, VoiceSelector, client::ElevenLabsClient};
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let client = ElevenLabsClient::from_env().unwrap();
//!         let config = SpeechConfig::new(
//!             VoiceSelector::Name("Rachel".to_string()),
//!             Model::MonolingualV1,
//!         );
//!         let audio = client.synthesize("Hello, World!", &config).await.unwrap();
//!         std::fs::write("output.mp3", &audio.audio_bytes).unwrap();
//!     }
//!     ```
//!     ### Streaming
//!     [synthesize_stream](tts::client::ElevenLabsClient::synthesize_stream)
//!     returns the audio as an ordered sequence of chunks as the service
//!     produces them.
//!     ```no_run
//!     use elevenlabs_tts::tts::{Model, SpeechConfig, VoiceSelector, client::ElevenLabsClient};
//!     use futures_util::StreamExt;
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let client = ElevenLabsClient::from_env().unwrap();
//!         let config = SpeechConfig::new(
//!             VoiceSelector::Name("Rachel".to_string()),
//!             Model::TurboV2,
//!         );
//!         let mut chunks = client.synthesize_stream("Hello, World!", &config).await.unwrap();
//!         while let Some(chunk) = chunks.next().await {
//!             let chunk = chunk.unwrap();
//!             // feed chunk to a playback sink
//!         }
//!     }
//!     ```
//!
//! The `elevenlabs-demo` binary runs the full demo sequence: voice listing,
//! basic synthesis, synthesis with custom settings, streaming playback and a
//! multi-voice comparison. [DemoRunner](runner::DemoRunner) is the
//! orchestration behind it.

mod constants;

pub mod error;
pub mod playback;
pub mod runner;
pub mod tts;
pub mod voice;
