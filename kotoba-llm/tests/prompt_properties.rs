//! Prompt rendering properties.
//!
//! Offline checks that every rendered prompt keeps the category, the schema
//! and the raw-JSON instruction, whatever the user typed.

use proptest::prelude::*;

use kotoba_llm::prompt::{PromptBuilder, RAW_JSON_INSTRUCTION, SCHEMA_DESCRIPTION};

proptest! {
    #[test]
    fn builtin_prompt_contains_category_and_instruction(category in "\\PC{1,40}") {
        let prompt = PromptBuilder::builtin().build(&category);
        prop_assert!(prompt.contains(&category));
        prop_assert!(prompt.contains(RAW_JSON_INSTRUCTION));
        prop_assert!(prompt.contains(SCHEMA_DESCRIPTION));
    }

    #[test]
    fn japanese_categories_survive(category in "[\\p{Han}\\p{Hiragana}]{1,6}") {
        let prompt = PromptBuilder::builtin().build(&category);
        let quoted = format!("\"{category}\"");
        prop_assert!(prompt.contains(&quoted));
    }

    #[test]
    fn shipped_template_contains_category(category in "[a-zA-Z ]{1,30}") {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/prompts/vocabulary.toml");
        let builder = PromptBuilder::from_file(path).expect("shipped template");
        let prompt = builder.build(&category);
        prop_assert!(prompt.contains(&category));
        prop_assert!(prompt.contains(RAW_JSON_INSTRUCTION));
    }
}

#[test]
fn weather_prompt_has_fixed_schema() {
    let prompt = PromptBuilder::builtin().build("weather");
    assert!(prompt.contains("weather"));
    assert!(prompt.contains("\"romaji\": \"Romanized version of the word\""));
    assert!(prompt.contains("\"english\": \"English translation\""));
}
