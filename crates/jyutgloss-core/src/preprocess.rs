use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lyrics preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim_start_matches('\u{feff}').trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC, not NFKC: compatibility folding rewrites the fullwidth
        // forms the skip table matches.
        let text: String = text.nfc().collect();

        text.replace("\r\n", "\n")
    }
}

pub struct LyricsPreprocessor;
impl Preprocessor for LyricsPreprocessor {}
