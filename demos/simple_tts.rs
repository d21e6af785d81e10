use elevenlabs_tts::{
    playback::{AudioSink, RodioSink},
    tts::{Model, SpeechConfig, VoiceSelector, client::ElevenLabsClient},
};

#[tokio::main]
async fn main() {
    println!("🎤 Simple ElevenLabs Demo");
    println!("{}", "-".repeat(30));

    let client = ElevenLabsClient::from_env().unwrap();

    let voices = client.get_voices_list().await.unwrap();
    println!("Available voices:");
    for voice in &voices {
        println!("- {} (ID: {})", voice.name, voice.voice_id);
    }
    println!();

    let text = "Hello! This is a simple example of using the ElevenLabs API in Rust.";
    let config = SpeechConfig::new(
        VoiceSelector::Name("Rachel".to_string()),
        Model::MonolingualV1,
    );
    let audio = client.synthesize(text, &config).await.unwrap();

    std::fs::write("simple_output.mp3", &audio.audio_bytes).unwrap();
    println!("Audio saved to simple_output.mp3");

    let mut sink = RodioSink::new();
    sink.play(&audio.audio_bytes).unwrap();
    println!("Playing audio...");

    println!("\n✅ Demo completed!");
}
