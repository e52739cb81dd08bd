use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_translate_timeout_secs() -> u64 {
    180
}

fn default_define_timeout_secs() -> u64 {
    90
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OracleConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Deadline for a full-lyrics translation call.
    #[serde(default = "default_translate_timeout_secs")]
    pub translate_timeout_secs: u64,
    /// Deadline for a definition-suggestion call.
    #[serde(default = "default_define_timeout_secs")]
    pub define_timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            translate_timeout_secs: default_translate_timeout_secs(),
            define_timeout_secs: default_define_timeout_secs(),
        }
    }
}
