use std::time::Duration;

use async_trait::async_trait;
use jyutgloss_core::types::{CharacterEntry, LineTranslation};
use serde::Deserialize;
use serde_json::json;

use crate::{DefinitionOracle, OracleError, TranslationOracle};

const TRANSLATE_SYSTEM_PROMPT: &str = "\
You are a professional translator specializing in Cantonese to English translation. \
Your task is to translate Cantonese song lyrics in a way that captures the overall meaning \
and emotional essence of the song rather than providing literal word-for-word translations.

Please:
1. Translate each line preserving the poetic and emotional meaning
2. Consider the context of the entire song when translating each line
3. Use natural English that flows well and maintains the song's sentiment
4. Return the translation as a JSON array where each object has \"originalLine\" and \"translatedLine\" properties

Example format:
[
  {\"originalLine\": \"原文第一行\", \"translatedLine\": \"English translation of first line\"},
  {\"originalLine\": \"原文第二行\", \"translatedLine\": \"English translation of second line\"}
]";

const DEFINE_SYSTEM_PROMPT: &str = "\
You are a Cantonese language expert. Given a set of Chinese characters and their context \
from song lyrics, provide definitions that best align with the song's meaning.

For each character, provide:
1. A contextually appropriate definition that fits the song's theme
2. A reasonable Cantonese pronunciation (romanized)

Return the result as a JSON array where each object has:
- \"character\": the Chinese character
- \"pronunciation\": romanized Cantonese pronunciation
- \"definition\": contextually appropriate definition

Example format:
[
  {\"character\": \"愛\", \"pronunciation\": \"oi3\", \"definition\": \"love; affection\"},
  {\"character\": \"心\", \"pronunciation\": \"sam1\", \"definition\": \"heart; mind; feelings\"}
]";

#[derive(Debug, Clone)]
pub struct ChatOracleConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub translate_timeout: Duration,
    pub define_timeout: Duration,
}

/// Chat-completions client speaking the OpenAI-compatible API.
///
/// One client serves both oracle roles; the two calls differ only in
/// prompt and deadline.
#[derive(Clone)]
pub struct ChatOracle {
    client: reqwest::Client,
    config: ChatOracleConfig,
}

impl ChatOracle {
    pub fn new(config: ChatOracleConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }

    /// One system+user round trip; returns the assistant's text.
    async fn chat(
        &self,
        system_prompt: &str,
        user_message: &str,
        deadline: Duration,
    ) -> Result<String, OracleError> {
        if self.config.api_key.is_empty() {
            return Err(OracleError::Authentication);
        }

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_message },
            ],
            "temperature": self.config.temperature,
        });

        let call = async {
            let response = self
                .client
                .post(&self.config.api_url)
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .json(&body)
                .send()
                .await?;

            match response.status().as_u16() {
                429 => return Err(OracleError::RateLimited),
                401 | 403 => return Err(OracleError::Authentication),
                _ => {}
            }
            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(OracleError::Api { status, body });
            }

            let payload: serde_json::Value = response.json().await?;
            let content = payload["choices"]
                .as_array()
                .and_then(|choices| choices.first())
                .and_then(|choice| choice["message"]["content"].as_str())
                .ok_or(OracleError::EmptyReply)?;

            Ok(content.trim().to_string())
        };

        tokio::time::timeout(deadline, call)
            .await
            .map_err(|_| OracleError::Timeout {
                seconds: deadline.as_secs(),
            })?
    }
}

#[async_trait]
impl TranslationOracle for ChatOracle {
    async fn translate_lyrics(
        &self,
        lyrics: &str,
    ) -> Result<Vec<LineTranslation>, OracleError> {
        tracing::info!(chars = lyrics.chars().count(), "requesting lyrics translation");

        let user = format!("Please translate these Cantonese lyrics:\n\n{lyrics}");
        let reply = self
            .chat(TRANSLATE_SYSTEM_PROMPT, &user, self.config.translate_timeout)
            .await?;

        let lines: Vec<LineTranslation> = parse_reply(&reply)?;
        tracing::info!(lines = lines.len(), "lyrics translation received");
        Ok(lines)
    }
}

/// Wire shape of one definition guess. The model occasionally answers
/// with words or omits fields; rows are filtered down to single
/// characters before they become entries.
#[derive(Debug, Deserialize)]
struct GuessRow {
    character: String,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    definition: String,
}

#[async_trait]
impl DefinitionOracle for ChatOracle {
    async fn suggest_definitions(
        &self,
        characters: &[char],
        lyrics: &str,
        song_context: Option<&str>,
    ) -> Result<Vec<CharacterEntry>, OracleError> {
        if characters.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(count = characters.len(), "requesting character definitions");

        let list = characters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let mut user = format!(
            "Please provide definitions for these characters found in Cantonese song lyrics:\n\n\
             Characters: {list}\n\nSong lyrics context:\n{lyrics}\n"
        );
        if let Some(context) = song_context {
            user.push_str(&format!("\nAdditional context: {context}\n"));
        }

        let reply = self
            .chat(DEFINE_SYSTEM_PROMPT, &user, self.config.define_timeout)
            .await?;

        let rows: Vec<GuessRow> = parse_reply(&reply)?;
        let entries: Vec<CharacterEntry> = rows
            .into_iter()
            .filter_map(|row| {
                let mut chars = row.character.chars();
                match (chars.next(), chars.next()) {
                    (Some(character), None) => Some(CharacterEntry {
                        character,
                        pronunciation: row.pronunciation,
                        definition: row.definition,
                    }),
                    _ => None,
                }
            })
            .collect();

        tracing::info!(suggestions = entries.len(), "character definitions received");
        Ok(entries)
    }
}

/// Parse a JSON array out of a model reply, tolerating prose or code
/// fences around it: on a direct parse failure, retry on the substring
/// from the first `[` to the last `]`.
fn parse_reply<T>(reply: &str) -> Result<Vec<T>, OracleError>
where
    T: for<'de> Deserialize<'de>,
{
    if let Ok(parsed) = serde_json::from_str(reply) {
        return Ok(parsed);
    }

    if let (Some(start), Some(end)) = (reply.find('['), reply.rfind(']')) {
        if start < end {
            if let Ok(parsed) = serde_json::from_str(&reply[start..=end]) {
                return Ok(parsed);
            }
        }
    }

    Err(OracleError::MalformedReply(preview(reply)))
}

fn preview(reply: &str) -> String {
    reply.chars().take(200).collect()
}
