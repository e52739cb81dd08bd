use std::env;

use serde::{Deserialize, Serialize};

use self::lexicon::LexiconConfig;
use self::oracle::OracleConfig;

pub mod lexicon;
pub mod oracle;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub oracle: OracleConfig,
    pub lexicon: LexiconConfig,
}

impl Config {
    /// Defaults plus environment overrides.
    pub fn new() -> Self {
        let mut oracle = OracleConfig::default();
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            oracle.api_key = key;
        }
        if let Ok(url) = env::var("JYUTGLOSS_API_URL") {
            oracle.api_url = url;
        }
        if let Ok(model) = env::var("JYUTGLOSS_MODEL") {
            oracle.model = model;
        }
        if let Some(secs) = env::var("JYUTGLOSS_TRANSLATE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            oracle.translate_timeout_secs = secs;
        }
        if let Some(secs) = env::var("JYUTGLOSS_DEFINE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            oracle.define_timeout_secs = secs;
        }

        let lexicon = LexiconConfig {
            path: env::var("JYUTGLOSS_LEXICON").ok(),
        };

        Config { oracle, lexicon }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            lexicon: LexiconConfig::default(),
        }
    }
}
