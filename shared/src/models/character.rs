use serde::{Deserialize, Serialize};

/// A generated character, produced in one piece by the generation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub name: String,
    pub enhanced_description: String,
    /// Hosted image reference, opaque to us
    pub image_url: String,
    pub persona_prompt: String,
    pub greeting: String,
}

// Request payloads
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CharacterRequest {
    pub description: String,
    pub tone: String,
    pub gender: String,
    pub style: String,
}

impl CharacterRequest {
    /// True when every field carries something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.description, &self.tone, &self.gender, &self.style]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

pub const TONES: &[&str] = &[
    "Neutral",
    "Friendly",
    "Formal",
    "Sarcastic",
    "Mysterious",
    "Grumpy",
    "Whimsical",
    "Stoic",
    "Enthusiastic",
    "Playful",
    "Melancholic",
    "Cynical",
    "Optimistic",
    "Aloof",
    "Dramatic",
    "World-weary",
    "Wise",
    "Haughty",
    "Timid",
    "Flirty",
];

pub const GENDERS: &[&str] = &["Non-binary", "Female", "Male", "Agender", "Other"];

pub const STYLES: &[&str] = &[
    "Realistic",
    "Anime",
    "Cartoonish",
    "Fantasy Art",
    "Cyberpunk",
    "Steampunk",
    "Pixel Art",
    "Impressionistic",
    "Photorealistic",
    "Watercolor",
    "Oil Painting",
    "Pencil Sketch",
    "Comic Book",
    "Art Nouveau",
    "Gothic",
    "Cel Shaded",
    "Low Poly",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_uses_camel_case_on_the_wire() {
        let profile = CharacterProfile {
            name: "Eleanor".into(),
            enhanced_description: "A tea-loving botanist.".into(),
            image_url: "https://img.example/eleanor.png".into(),
            persona_prompt: "You are Eleanor.".into(),
            greeting: "Tea?".into(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["enhancedDescription"], "A tea-loving botanist.");
        assert_eq!(json["imageUrl"], "https://img.example/eleanor.png");
        assert_eq!(json["personaPrompt"], "You are Eleanor.");
    }

    #[test]
    fn request_with_blank_description_is_incomplete() {
        let req = CharacterRequest {
            description: "   ".into(),
            tone: "Neutral".into(),
            gender: "Male".into(),
            style: "Realistic".into(),
        };
        assert!(!req.is_complete());

        let req = CharacterRequest {
            description: "A grumpy wizard".into(),
            ..req
        };
        assert!(req.is_complete());
    }

    #[test]
    fn option_catalogues_have_no_duplicates() {
        for list in [TONES, GENDERS, STYLES] {
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
