//! Voice Type and lookup helper
//!
//! [Voice] is the descriptor returned by the voices listing endpoint.
//! Use [ElevenLabsClient::get_voices_list](crate::tts::client::ElevenLabsClient::get_voices_list)
//! to fetch all voices available to the account, and [find_voice_by_name] to
//! pick one out of the listing by display name.

/// Voice fetched from the ElevenLabs voices API.
///
/// `voice_id` is opaque and stable per account; the rest is display metadata.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Response envelope of the voices listing endpoint.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// Case-insensitive exact-name scan over a voices listing.
///
/// Absence is a normal outcome, not an error.
pub fn find_voice_by_name<'a>(voices: &'a [Voice], name: &str) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|voice| voice.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<Voice> {
        vec![
            Voice {
                voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
                name: "Rachel".to_string(),
                category: Some("premade".to_string()),
                description: None,
            },
            Voice {
                voice_id: "29vD33N1CtxCmqQRPOHJ".to_string(),
                name: "Drew".to_string(),
                category: Some("premade".to_string()),
                description: Some("well-rounded".to_string()),
            },
        ]
    }

    #[test]
    fn find_voice_by_name_is_case_insensitive() {
        let voices = listing();
        let lower = find_voice_by_name(&voices, "rachel").unwrap();
        let upper = find_voice_by_name(&voices, "Rachel").unwrap();
        assert_eq!(lower.voice_id, upper.voice_id);
        assert_eq!(lower.voice_id, "21m00Tcm4TlvDq8ikWAM");
    }

    #[test]
    fn find_voice_by_name_absent_is_none() {
        let voices = listing();
        assert!(find_voice_by_name(&voices, "Bella").is_none());
        assert!(find_voice_by_name(&[], "Rachel").is_none());
    }

    #[test]
    fn voice_deserializes_with_unknown_fields() {
        let json = r#"{
            "voices": [{
                "voice_id": "abc123",
                "name": "Clyde",
                "category": "premade",
                "description": null,
                "preview_url": "https://example.com/clyde.mp3",
                "labels": {"accent": "american"}
            }]
        }"#;
        let response: VoicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.voices.len(), 1);
        assert_eq!(response.voices[0].voice_id, "abc123");
        assert_eq!(response.voices[0].name, "Clyde");
        assert_eq!(response.voices[0].category.as_deref(), Some("premade"));
        assert!(response.voices[0].description.is_none());
    }
}
