use elevenlabs_tts::{
    playback::RodioSink,
    runner::DemoRunner,
    tts::{VoiceSettings, client::ElevenLabsClient},
};
use std::path::Path;
use std::process::ExitCode;

/// Voice names used by the multi-voice comparison demo. Availability varies
/// by subscription tier; each one is attempted independently.
static DEMO_VOICES: [&str; 4] = ["Rachel", "Drew", "Clyde", "Paul"];

#[tokio::main]
async fn main() -> ExitCode {
    println!("🎬 ElevenLabs API Demo");
    println!("{}", "=".repeat(40));

    let client = match ElevenLabsClient::from_env() {
        Ok(client) => client,
        Err(error) => {
            println!("❌ 配置错误: {}", error);
            println!("\n🔧 设置说明:");
            println!("1. 获取 ElevenLabs API 密钥: https://elevenlabs.io/");
            println!("2. 设置环境变量: export ELEVENLABS_API_KEY='your_api_key'");
            println!("3. 或者在代码中直接传入 api_key 参数");
            return ExitCode::FAILURE;
        }
    };
    let mut demo = DemoRunner::new(client, RodioSink::new());

    // Demo 1: list available voices
    println!("\n1️⃣  演示：列出可用语音");
    let voices = match demo.list_voices().await {
        Ok(voices) => voices,
        Err(error) => {
            println!("❌ 错误: {}", error);
            Vec::new()
        }
    };

    // Demo 2: basic TTS
    println!("\n2️⃣  演示：基础文本转语音");
    demo.basic_tts(
        "Hello! This is a demonstration of ElevenLabs text-to-speech API. The quality is quite impressive!",
        "Rachel",
        "demo_basic.mp3",
    )
    .await;

    // Demo 3: advanced TTS with custom settings
    if let Some(first_voice) = voices.first() {
        println!("\n3️⃣  演示：高级设置文本转语音");
        demo.advanced_tts_with_settings(
            "This is an advanced example with custom voice settings. Notice the difference in tone and style.",
            &first_voice.voice_id,
            VoiceSettings {
                stability: 0.7,
                similarity_boost: 0.8,
                style: 0.2,
                use_speaker_boost: true,
            },
            "demo_advanced.mp3",
        )
        .await;
    }

    // Demo 4: streaming TTS
    println!("\n4️⃣  演示：流式文本转语音");
    demo.streaming_tts(
        "This is a streaming example. The audio should play in real-time as it's being generated.",
        "Rachel",
    )
    .await;

    // Demo 5: multiple voices comparison
    println!("\n5️⃣  演示：多语音对比");
    demo.demo_multiple_voices(
        "This is the same text spoken by different voices for comparison.",
        &DEMO_VOICES,
        Path::new("."),
    )
    .await;

    println!("\n🎉 所有演示完成！");
    println!("📁 检查当前目录中生成的音频文件");
    ExitCode::SUCCESS
}
