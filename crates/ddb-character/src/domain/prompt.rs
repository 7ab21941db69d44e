//! Prompt composition for description and backstory generation

use super::views::{AppearanceView, PersonalityView};

const PART_SEPARATOR: &str = ". ";

/// Prompt asking for a physical description.
///
/// `context` fills the second slot. The client passes the appearance view
/// here as well, so both halves carry the same data.
pub fn description_prompt(appearance: &AppearanceView, context: &AppearanceView) -> String {
    [
        format!(
            "Describe a DnD character with the following physical characteristics: {}",
            appearance
        ),
        format!("Consider also this information for context: {}", context),
    ]
    .join(PART_SEPARATOR)
}

/// Prompt asking for a backstory built around the character's identity,
/// personality and any backstory already written on the sheet.
pub fn backstory_prompt(
    name: &str,
    appearance: &AppearanceView,
    personality: &PersonalityView,
    existing_backstory: &str,
) -> String {
    [
        format!(
            "Create a backstory for a DnD character named {}, who is a {} {}",
            name, appearance.gender, appearance.race
        ),
        format!(
            "The backstory should fit with the following information: {}",
            personality
        ),
        format!(
            "The backstory should use the following text for inspiration, if not 'Unknown': {}",
            existing_backstory
        ),
    ]
    .join(PART_SEPARATOR)
}
