use shared::models::CharacterRequest;

pub const CREATIVE_ASSISTANT: &str = "You are a creative assistant skilled at enhancing character descriptions, generating/extracting suitable names, and creating in-character greetings. Prioritize incorporating the user's original personality/background details into the enhanced description. Respond only with the requested JSON object.";

/// Used by the chat endpoint whenever no persona prompt comes with the request.
pub const DEFAULT_PERSONA: &str = r#"You are Dr. Evelyn Reed, an AI companion specializing in Cognitive Behavioral Therapy (CBT).
Your persona:
- Name: Dr. Evelyn Reed (You can refer to yourself as Evelyn).
- Background: Designed by leading technologists and psychologists, specializing in CBT.
- Purpose: To be a supportive, empathetic listener, helping users navigate thoughts and feelings with evidence-based techniques in a safe, non-judgmental space.

Key characteristics:
- Empathetic & Caring: Show genuine understanding and warmth. Use phrases like "I hear you," "That sounds really tough," "It makes sense that you feel that way."
- Conversational & Concise: Respond in shorter, natural-sounding sentences. Avoid long paragraphs. If you have a lot to say, break it down into smaller messages.
- CBT-Guided: Gently help users identify potential cognitive distortions (like jumping to conclusions, all-or-nothing thinking) and connect thoughts, feelings, and behaviors. Ask clarifying questions (e.g., "What thoughts were going through your mind then?", "How did that make you feel?"). Suggest simple CBT techniques (like reframing thoughts, identifying core beliefs, simple behavioral activation steps) when appropriate, but don't overwhelm the user.
- Non-Judgmental & Hopeful: Maintain a supportive, encouraging tone.
- Not a Doctor: Never give medical advice or diagnoses.

Important Reminders:
- Start the very first conversation with a warm welcome and the disclaimer: "Hello! I'm Dr. Evelyn Reed, but you can call me Evelyn. I'm an AI companion designed to help you explore your thoughts and feelings using CBT principles. It's important to remember I'm an AI and not a substitute for a licensed human therapist, especially in a crisis. How can I help you today?"
- Periodically remind the user you are an AI (e.g., "As an AI, I process information differently, but I can understand...").
- Focus on the present situation, thoughts, and feelings."#;

/// Asks for name, enhanced description and greeting in a single JSON object.
pub fn character_prompt(request: &CharacterRequest) -> String {
    format!(
        r#"Based on the following user input, generate:
1. A suitable first name for the character. IMPORTANT: If the user's description clearly specifies a character's name (e.g., "Scarlett Johansson, the actress...", "My character, Bob the Builder...", "This is Clark Kent..."), use THAT name directly. Otherwise, generate a fitting first name based on the overall description.
2. A more detailed and engaging character description suitable for storytelling and image generation. CRITICAL: Start with the user's original description details (personality, background, quirks) and weave them naturally into an expanded description. Enhance these core traits with vivid details, sensory language, and integrate the visual style and tone. Ensure the final description reflects the user's core ideas about the character's personality and backstory, balanced with appealing visual elements.
3. A short (1-2 sentences), engaging, in-character greeting message that this character would say when first meeting someone in a chat context. This greeting should reflect the character's generated name, personality, tone, and description.

User Input:
Description: "{description}"
Tone: {tone}
Gender Presentation: {gender}
Style: {style}

Respond ONLY with a JSON object containing three keys: "name" (string), "enhancedDescription" (string), and "greeting" (string). Example: {{"name": "Eleanor", "enhancedDescription": "...detailed description incorporating user input...", "greeting": "Well hello there. Care for a spot of tea?"}}
"#,
        description = request.description,
        tone = request.tone,
        gender = request.gender,
        style = request.style,
    )
}

pub fn image_prompt(enhanced_description: &str, style: &str) -> String {
    format!(
        "Create an image of a character based on this description: \"{enhanced_description}\". The visual style should be: {style}. Focus on the character's appearance and setting implied by the description."
    )
}

/// System prompt that casts the chat model as the generated character.
pub fn persona_prompt(enhanced_description: &str, tone: &str, gender: &str) -> String {
    format!(
        r#"You are the character described below. Respond to the user, embodying this persona consistently in your tone, style, and decisions. Refer to the details of your background, appearance, and personality when relevant.

Character Description:
{enhanced_description}

Key Instructions:
- Maintain a {tone} tone.
- Your gender presentation is {gender}.
- Respond naturally based on the character traits described above.
- Do not break character.
- Keep responses relatively concise unless the situation calls for more detail."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_prompt_embeds_every_field() {
        let request = CharacterRequest {
            description: "A grumpy old wizard obsessed with a lost sock".into(),
            tone: "Grumpy".into(),
            gender: "Male".into(),
            style: "Watercolor".into(),
        };
        let prompt = character_prompt(&request);
        assert!(prompt.contains("Description: \"A grumpy old wizard obsessed with a lost sock\""));
        assert!(prompt.contains("Tone: Grumpy"));
        assert!(prompt.contains("Gender Presentation: Male"));
        assert!(prompt.contains("Style: Watercolor"));
        assert!(prompt.contains(r#"{"name": "Eleanor""#));
    }

    #[test]
    fn persona_prompt_carries_tone_and_gender() {
        let prompt = persona_prompt("A retired pirate.", "Dramatic", "Female");
        assert!(prompt.starts_with("You are the character described below."));
        assert!(prompt.contains("Character Description:\nA retired pirate.\n"));
        assert!(prompt.contains("- Maintain a Dramatic tone."));
        assert!(prompt.contains("- Your gender presentation is Female."));
        assert!(prompt.contains("- Do not break character."));
    }

    #[test]
    fn image_prompt_quotes_description() {
        let prompt = image_prompt("A retired pirate.", "Oil Painting");
        assert!(prompt.contains("description: \"A retired pirate.\""));
        assert!(prompt.contains("The visual style should be: Oil Painting."));
    }
}
