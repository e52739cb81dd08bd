use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path to a reference file; the embedded dataset is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}
