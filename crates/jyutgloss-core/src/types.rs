use serde::{Deserialize, Serialize};

/// One known character from the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub character: char,
    /// Romanized Cantonese pronunciation; empty when the source line had
    /// no parseable separator.
    pub pronunciation: String,
    pub definition: String,
}

/// Classification of one lyrics text against the lexicon.
///
/// Both lists keep first-appearance order. A distinct character lands in
/// exactly one of them unless the skip policy excludes it entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAnalysis {
    pub new_characters: Vec<char>,
    pub found_characters: Vec<CharacterEntry>,
}

/// One translated lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTranslation {
    pub original_line: String,
    pub translated_line: String,
}

/// Full output of the lyrics pipeline: translation plus character
/// analysis plus oracle-proposed definitions for the unknown characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsReport {
    pub translation: Vec<LineTranslation>,
    pub analysis: CharacterAnalysis,
    pub suggested_definitions: Vec<CharacterEntry>,
}
