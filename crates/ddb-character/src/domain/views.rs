//! Derived Views
//!
//! Fixed-shape projections out of a [`CharacterRecord`]. Every field is
//! printable: anything the record lacks is `"Unknown"`.

use std::fmt;

use serde::Serialize;

use super::record::CharacterRecord;

/// Physical characteristics of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceView {
    pub gender: String,
    pub age: String,
    pub eyes: String,
    pub hair: String,
    pub height: String,
    pub weight: String,
    pub skin: String,
    pub race: String,
    pub appearance: String,
    pub personal_possessions: String,
}

impl AppearanceView {
    pub fn from_record(record: &CharacterRecord) -> Self {
        Self {
            gender: record.text(&["gender"]),
            age: record.text(&["age"]),
            eyes: record.text(&["eyes"]),
            hair: record.text(&["hair"]),
            height: record.text(&["height"]),
            weight: record.text(&["weight"]),
            skin: record.text(&["skin"]),
            race: record.text(&["race", "fullName"]),
            appearance: record.text(&["traits", "appearance"]),
            personal_possessions: record.text(&["notes", "personalPossessions"]),
        }
    }

    /// Key/value pairs in their fixed order
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("gender", self.gender.as_str()),
            ("age", self.age.as_str()),
            ("eyes", self.eyes.as_str()),
            ("hair", self.hair.as_str()),
            ("height", self.height.as_str()),
            ("weight", self.weight.as_str()),
            ("skin", self.skin.as_str()),
            ("race", self.race.as_str()),
            ("appearance", self.appearance.as_str()),
            ("personalPossessions", self.personal_possessions.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        lookup(&self.entries(), key)
    }
}

impl fmt::Display for AppearanceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.entries())
    }
}

/// Personality, background and affiliations of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityView {
    pub background: String,
    #[serde(rename = "class_levels")]
    pub class_levels: String,
    pub faith: String,
    pub personality_traits: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub allies: String,
    pub organizations: String,
    pub enemies: String,
    pub other_holdings: String,
}

impl PersonalityView {
    pub fn from_record(record: &CharacterRecord) -> Self {
        Self {
            background: record.text(&["background", "name"]),
            class_levels: record.class_levels(),
            faith: record.text(&["faith"]),
            personality_traits: record.text(&["traits", "personalityTraits"]),
            ideals: record.text(&["traits", "ideals"]),
            bonds: record.text(&["traits", "bonds"]),
            flaws: record.text(&["traits", "flaws"]),
            allies: record.text(&["notes", "allies"]),
            organizations: record.text(&["notes", "organizations"]),
            enemies: record.text(&["notes", "enemies"]),
            other_holdings: record.text(&["notes", "otherHoldings"]),
        }
    }

    /// Key/value pairs in their fixed order
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("background", self.background.as_str()),
            ("class_levels", self.class_levels.as_str()),
            ("faith", self.faith.as_str()),
            ("personalityTraits", self.personality_traits.as_str()),
            ("ideals", self.ideals.as_str()),
            ("bonds", self.bonds.as_str()),
            ("flaws", self.flaws.as_str()),
            ("allies", self.allies.as_str()),
            ("organizations", self.organizations.as_str()),
            ("enemies", self.enemies.as_str()),
            ("otherHoldings", self.other_holdings.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        lookup(&self.entries(), key)
    }
}

impl fmt::Display for PersonalityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.entries())
    }
}

fn lookup<'a>(entries: &[(&'static str, &'a str)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

// Renders as `{key: value, key: value}` for prompt composition
fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[(&'static str, &str)]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    write!(f, "}}")
}
