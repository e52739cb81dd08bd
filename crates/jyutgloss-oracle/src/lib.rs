use jyutgloss_core::types::{CharacterEntry, LineTranslation};

pub mod chat;

/// Lyrics translation provider interface
#[async_trait::async_trait]
pub trait TranslationOracle: Send + Sync {
    /// Translate full lyrics into an ordered sequence of line pairs.
    async fn translate_lyrics(
        &self,
        lyrics: &str,
    ) -> Result<Vec<LineTranslation>, OracleError>;
}

/// Contextual definition provider interface
#[async_trait::async_trait]
pub trait DefinitionOracle: Send + Sync {
    /// Propose pronunciation and definition guesses for characters the
    /// lexicon does not know, using the lyrics as context.
    async fn suggest_definitions(
        &self,
        characters: &[char],
        lyrics: &str,
        song_context: Option<&str>,
    ) -> Result<Vec<CharacterEntry>, OracleError>;
}

/// Failure is terminal for the request; callers do not retry.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no reply content from model")]
    EmptyReply,

    #[error("could not parse model reply: {0}")]
    MalformedReply(String),

    #[error("call timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("authentication error")]
    Authentication,
}
