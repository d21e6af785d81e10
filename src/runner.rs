//! Demo runner: one operation per demo scenario.
//!
//! Execution is strictly sequential. Each scenario is independently
//! fallible: failures inside a scenario are caught at its boundary, printed
//! and treated as a skipped scenario, so a bad voice name or quota rejection
//! never aborts the remaining demos. Only credential resolution (done before
//! a runner exists) is fatal to the whole run.

use crate::error::Result;
use crate::playback::AudioSink;
use crate::tts::{Model, SpeechConfig, SpeechService, VoiceSelector, VoiceSettings};
use crate::voice::{Voice, find_voice_by_name};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};

pub struct DemoRunner<S, K> {
    service: S,
    sink: K,
}

impl<S: SpeechService, K: AudioSink> DemoRunner<S, K> {
    pub fn new(service: S, sink: K) -> Self {
        Self { service, sink }
    }

    /// List all voices available to the account, printing each one.
    ///
    /// Listing failures propagate; the caller decides whether the rest of
    /// the run still makes sense without a listing.
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        println!("📋 获取可用语音列表...");
        let voices = self.service.voices().await?;

        println!("\n找到 {} 个可用语音:", voices.len());
        println!("{}", "-".repeat(50));

        for voice in &voices {
            println!("🗣️  {}", voice.name);
            println!("   ID: {}", voice.voice_id);
            println!("   类别: {}", voice.category.as_deref().unwrap_or("N/A"));
            println!("   描述: {}", voice.description.as_deref().unwrap_or("N/A"));
            println!();
        }

        Ok(voices)
    }

    /// Basic text-to-speech with the default model: save to file, then play.
    pub async fn basic_tts(&mut self, text: &str, voice_name: &str, output_file: &str) {
        println!("🔊 基础文本转语音: '{}...'", preview(text));
        println!("📢 使用语音: {}", voice_name);

        if let Err(error) = self.try_basic_tts(text, voice_name, output_file).await {
            println!("❌ 错误: {}", error);
        }
    }

    async fn try_basic_tts(&mut self, text: &str, voice_name: &str, output_file: &str) -> Result<()> {
        let config = SpeechConfig::new(
            VoiceSelector::Name(voice_name.to_string()),
            Model::MonolingualV1,
        );
        let audio = self.service.synthesize(text, &config).await?;

        std::fs::write(output_file, &audio.audio_bytes)?;
        println!("✅ 音频已保存到: {}", output_file);

        println!("🎵 播放音频...");
        self.sink.play(&audio.audio_bytes)?;
        Ok(())
    }

    /// Advanced text-to-speech with custom voice settings on the
    /// high-quality multilingual model.
    pub async fn advanced_tts_with_settings(
        &mut self,
        text: &str,
        voice_id: &str,
        settings: VoiceSettings,
        output_file: &str,
    ) {
        println!("🎛️  高级文本转语音设置:");
        println!("   稳定性: {}", settings.stability);
        println!("   相似度增强: {}", settings.similarity_boost);
        println!("   风格: {}", settings.style);
        println!("   扬声器增强: {}", settings.use_speaker_boost);

        if let Err(error) = self
            .try_advanced_tts(text, voice_id, settings, output_file)
            .await
        {
            println!("❌ 错误: {}", error);
        }
    }

    async fn try_advanced_tts(
        &mut self,
        text: &str,
        voice_id: &str,
        settings: VoiceSettings,
        output_file: &str,
    ) -> Result<()> {
        let config = SpeechConfig::new(
            VoiceSelector::Id(voice_id.to_string()),
            Model::MultilingualV2,
        )
        .with_settings(settings);
        let audio = self.service.synthesize(text, &config).await?;

        std::fs::write(output_file, &audio.audio_bytes)?;
        println!("✅ 高级音频已保存到: {}", output_file);
        self.sink.play(&audio.audio_bytes)?;
        Ok(())
    }

    /// Streaming text-to-speech on the low-latency model, feeding chunks to
    /// the playback sink as they arrive.
    pub async fn streaming_tts(&mut self, text: &str, voice_name: &str) {
        println!("🌊 流式文本转语音: '{}...'", preview(text));
        println!("🎵 实时播放中...");

        match self.try_streaming_tts(text, voice_name).await {
            Ok(()) => println!("✅ 流式播放完成"),
            Err(error) => println!("❌ 错误: {}", error),
        }
    }

    async fn try_streaming_tts(&mut self, text: &str, voice_name: &str) -> Result<()> {
        let config = SpeechConfig::new(
            VoiceSelector::Name(voice_name.to_string()),
            Model::TurboV2,
        );
        let mut chunks = self.service.synthesize_stream(text, &config).await?;

        // Chunks are forwarded strictly in arrival order.
        while let Some(chunk) = chunks.next().await {
            self.sink.play_chunk(&chunk?)?;
        }
        self.sink.finish()
    }

    /// Synthesize the same text with each configured voice and save one file
    /// per voice. Each voice is attempted independently; availability varies
    /// by subscription tier. No playback.
    pub async fn demo_multiple_voices(&mut self, text: &str, voice_names: &[&str], output_dir: &Path) {
        println!("🎭 多语音演示: '{}'", text);

        for (i, voice_name) in voice_names.iter().enumerate() {
            let index = i + 1;
            println!("\n🗣️  语音 {}: {}", index, voice_name);

            let output_file = comparison_output_path(output_dir, index, voice_name);
            match self.try_comparison_tts(text, voice_name, &output_file).await {
                Ok(()) => println!("   💾 保存到: {}", output_file.display()),
                Err(error) => println!("   ❌ 语音 {} 失败: {}", voice_name, error),
            }
        }
    }

    async fn try_comparison_tts(
        &mut self,
        text: &str,
        voice_name: &str,
        output_file: &Path,
    ) -> Result<()> {
        let config = SpeechConfig::new(
            VoiceSelector::Name(voice_name.to_string()),
            Model::MonolingualV1,
        );
        let audio = self.service.synthesize(text, &config).await?;
        std::fs::write(output_file, &audio.audio_bytes)?;
        Ok(())
    }

    /// Fetch a fresh listing and scan it for `name`, case-insensitively.
    /// Absence is a normal outcome.
    pub async fn get_voice_by_name(&self, name: &str) -> Result<Option<Voice>> {
        let voices = self.service.voices().await?;
        Ok(find_voice_by_name(&voices, name).cloned())
    }
}

/// Output path of one comparison-demo voice. Deterministic, so repeated
/// runs overwrite rather than accumulate.
fn comparison_output_path(output_dir: &Path, index: usize, voice_name: &str) -> PathBuf {
    output_dir.join(format!("demo_voice_{}_{}.mp3", index, voice_name.to_lowercase()))
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
