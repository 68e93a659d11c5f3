pub const GENERATION_SYSTEM: &str = include_str!("../data/prompts/generation_system.txt");
pub const GENERATION_USER: &str = include_str!("../data/prompts/generation_user.txt");
pub const TRANSCRIPTION_INSTRUCTION: &str =
    include_str!("../data/prompts/transcription_instruction.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_SPEECH_SENTINEL;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!GENERATION_SYSTEM.is_empty());
        assert!(!GENERATION_USER.is_empty());
        assert!(!TRANSCRIPTION_INSTRUCTION.is_empty());
    }

    #[test]
    fn test_generation_user_has_source_text_placeholder() {
        assert!(GENERATION_USER.contains("{{source_text}}"));
    }

    #[test]
    fn test_generation_system_demands_the_expected_schema() {
        assert!(GENERATION_SYSTEM.contains("\"title\""));
        assert!(GENERATION_SYSTEM.contains("\"oneLiner\""));
        assert!(GENERATION_SYSTEM.contains("\"structure\""));
        assert!(GENERATION_SYSTEM.contains("SAME LANGUAGE"));
    }

    #[test]
    fn test_transcription_instruction_names_the_sentinel() {
        assert!(TRANSCRIPTION_INSTRUCTION.contains(NO_SPEECH_SENTINEL));
    }
}
