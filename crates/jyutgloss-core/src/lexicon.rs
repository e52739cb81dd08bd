use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;

use crate::error::LexiconError;
use crate::types::CharacterEntry;

/// Embedded copy of the curated reference data.
const EMBEDDED: &str = include_str!("../data/cantonese.txt");

/// Header lines discarded unconditionally from the reference file.
const HEADER_LINES: usize = 2;

/// The loaded character reference: one entry per known character.
///
/// Immutable after construction. Long-lived callers build it at most
/// once per process through [`LexiconHandle`].
#[derive(Debug)]
pub struct Lexicon {
    entries: HashMap<char, CharacterEntry>,
}

impl Lexicon {
    /// Parse reference-file text.
    ///
    /// Per data line: `character<TAB>pronunciation definition...`, with
    /// pronunciation and definition split on the first space of the
    /// remainder. Malformed lines are skipped, not errors. A later line
    /// for the same character overwrites the earlier one.
    pub fn parse(raw: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for line in raw.lines().skip(HEADER_LINES) {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                continue;
            }

            // The key must be exactly one character; anything longer
            // could never match a per-character lookup.
            let mut key_chars = fields[0].chars();
            let character = match (key_chars.next(), key_chars.next()) {
                (Some(c), None) => c,
                _ => continue,
            };

            // Definitions may legitimately contain tabs; re-join instead
            // of taking the second field alone.
            let rest = fields[1..].join("\t");
            let (pronunciation, definition) = match rest.find(' ') {
                Some(i) if i > 0 => (rest[..i].to_string(), rest[i + 1..].to_string()),
                _ => (String::new(), rest),
            };

            entries.insert(
                character,
                CharacterEntry {
                    character,
                    pronunciation,
                    definition,
                },
            );
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { entries })
    }

    /// Load the embedded reference data.
    pub fn embedded() -> Result<Self, LexiconError> {
        let lexicon = Self::parse(EMBEDDED)?;
        tracing::info!(entries = lexicon.len(), "loaded embedded character reference");
        Ok(lexicon)
    }

    /// Load reference data from a file on disk.
    pub async fn from_file(path: &Path) -> Result<Self, LexiconError> {
        tracing::info!(path = %path.display(), "loading character reference");
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LexiconError::NotFound(path.to_path_buf())
            } else {
                LexiconError::Io(e)
            }
        })?;
        let lexicon = Self::parse(&raw)?;
        tracing::info!(entries = lexicon.len(), "loaded character reference");
        Ok(lexicon)
    }

    pub fn get(&self, character: char) -> Option<&CharacterEntry> {
        self.entries.get(&character)
    }

    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// Number of known characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum Source {
    Embedded,
    File(PathBuf),
}

/// Lazily initialized, process-lived lexicon.
///
/// The first `get` performs the read and parse; concurrent first calls
/// coalesce onto a single load. Every later call returns the cached
/// value without touching storage. A failed load leaves the cell empty,
/// so the error surfaces again on the next call instead of being cached.
pub struct LexiconHandle {
    source: Source,
    cell: OnceCell<Lexicon>,
}

impl LexiconHandle {
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
            cell: OnceCell::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&Lexicon, LexiconError> {
        self.cell
            .get_or_try_init(|| async {
                match &self.source {
                    Source::Embedded => Lexicon::embedded(),
                    Source::File(path) => Lexicon::from_file(path).await,
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_then_entries() {
        let lexicon = Lexicon::parse("line1\nline2\n愛\toi3 love; affection\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        let entry = lexicon.get('愛').unwrap();
        assert_eq!(entry.pronunciation, "oi3");
        assert_eq!(entry.definition, "love; affection");
    }

    #[test]
    fn header_lines_are_discarded_even_when_they_look_like_data() {
        let lexicon = Lexicon::parse("心\tsam1 heart\n心\tsam1 heart\n愛\toi3 love\n").unwrap();
        assert!(!lexicon.contains('心'));
        assert!(lexicon.contains('愛'));
    }

    #[test]
    fn line_without_tab_is_skipped() {
        let lexicon = Lexicon::parse("h1\nh2\n愛 oi3 love\n心\tsam1 heart\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains('心'));
    }

    #[test]
    fn multi_character_key_is_skipped() {
        let lexicon = Lexicon::parse("h1\nh2\n愛心\toi3 love\n心\tsam1 heart\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains('心'));
    }

    #[test]
    fn later_duplicate_wins() {
        let lexicon =
            Lexicon::parse("h1\nh2\n愛\toi3 old gloss\n愛\toi3 love; affection\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get('愛').unwrap().definition, "love; affection");
    }

    #[test]
    fn rest_without_space_becomes_definition() {
        let lexicon = Lexicon::parse("h1\nh2\n愛\toi3\n").unwrap();
        let entry = lexicon.get('愛').unwrap();
        assert_eq!(entry.pronunciation, "");
        assert_eq!(entry.definition, "oi3");
    }

    #[test]
    fn rest_starting_with_space_keeps_whole_rest_as_definition() {
        let lexicon = Lexicon::parse("h1\nh2\n愛\t oi3 love\n").unwrap();
        let entry = lexicon.get('愛').unwrap();
        assert_eq!(entry.pronunciation, "");
        assert_eq!(entry.definition, " oi3 love");
    }

    #[test]
    fn embedded_tabs_in_definition_survive() {
        let lexicon = Lexicon::parse("h1\nh2\n愛\toi3 love\taffection\n").unwrap();
        assert_eq!(lexicon.get('愛').unwrap().definition, "love\taffection");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let lexicon = Lexicon::parse("h1\nh2\n\n愛\toi3 love\n   \n").unwrap();
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn no_entries_is_an_error() {
        assert!(matches!(Lexicon::parse("h1\nh2\n"), Err(LexiconError::Empty)));
        assert!(matches!(Lexicon::parse(""), Err(LexiconError::Empty)));
        // Only one header line and nothing else: still empty.
        assert!(matches!(Lexicon::parse("h1\n"), Err(LexiconError::Empty)));
    }

    #[test]
    fn embedded_reference_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(lexicon.len() > 0);
        assert_eq!(lexicon.get('愛').unwrap().pronunciation, "oi3");
    }

    #[test]
    fn loading_twice_yields_identical_contents() {
        let first = Lexicon::embedded().unwrap();
        let second = Lexicon::embedded().unwrap();
        assert_eq!(first.len(), second.len());
        for entry in first.entries.values() {
            assert_eq!(second.get(entry.character), Some(entry));
        }
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let err = Lexicon::from_file(Path::new("/no/such/reference.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LexiconError::NotFound(_)));
    }

    #[tokio::test]
    async fn handle_caches_the_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cantonese.txt");
        std::fs::write(&path, "h1\nh2\n愛\toi3 love; affection\n").unwrap();

        let handle = LexiconHandle::from_path(&path);
        let first = handle.get().await.unwrap();
        assert_eq!(first.len(), 1);

        // Replacing the file after the first load must not change the
        // cached contents.
        std::fs::write(&path, "h1\nh2\n心\tsam1 heart\n").unwrap();
        let second = handle.get().await.unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(second.contains('愛'));
        assert!(!second.contains('心'));
    }

    #[tokio::test]
    async fn handle_retries_after_a_failed_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cantonese.txt");

        let handle = LexiconHandle::from_path(&path);
        assert!(matches!(
            handle.get().await.unwrap_err(),
            LexiconError::NotFound(_)
        ));

        std::fs::write(&path, "h1\nh2\n愛\toi3 love\n").unwrap();
        assert_eq!(handle.get().await.unwrap().len(), 1);
    }
}
