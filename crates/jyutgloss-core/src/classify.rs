use std::collections::HashSet;

use crate::charset;
use crate::lexicon::Lexicon;
use crate::types::CharacterAnalysis;

impl Lexicon {
    /// Partition the distinct characters of `text` into entries already
    /// in the lexicon and characters it has never seen.
    ///
    /// Both lists keep first-appearance order; callers display them in
    /// that order. Skip-category characters (see [`charset`]) land in
    /// neither list. Empty input yields two empty lists.
    pub fn classify(&self, text: &str) -> CharacterAnalysis {
        let mut seen = HashSet::new();
        let mut analysis = CharacterAnalysis::default();

        for c in text.chars() {
            if !seen.insert(c) {
                continue;
            }
            if charset::is_skipped(c) {
                continue;
            }
            match self.get(c) {
                Some(entry) => analysis.found_characters.push(entry.clone()),
                None => analysis.new_characters.push(c),
            }
        }

        tracing::debug!(
            new = analysis.new_characters.len(),
            found = analysis.found_characters.len(),
            "classified lyrics text"
        );

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        Lexicon::parse("line1\nline2\n愛\toi3 love; affection\n").unwrap()
    }

    #[test]
    fn partitions_found_and_new() {
        let analysis = fixture().classify("我愛你123abc");
        assert_eq!(analysis.new_characters, vec!['我', '你']);
        assert_eq!(analysis.found_characters.len(), 1);
        let entry = &analysis.found_characters[0];
        assert_eq!(entry.character, '愛');
        assert_eq!(entry.pronunciation, "oi3");
        assert_eq!(entry.definition, "love; affection");
    }

    #[test]
    fn empty_input_yields_empty_lists() {
        let analysis = fixture().classify("");
        assert!(analysis.new_characters.is_empty());
        assert!(analysis.found_characters.is_empty());
    }

    #[test]
    fn repeats_count_once_in_first_appearance_order() {
        let analysis = fixture().classify("你你我愛我你");
        assert_eq!(analysis.new_characters, vec!['你', '我']);
        assert_eq!(analysis.found_characters.len(), 1);
    }

    #[test]
    fn skip_categories_land_in_neither_list() {
        let analysis = fixture().classify("愛, my love！\u{3000}€ 愛");
        assert!(analysis.new_characters.is_empty());
        assert_eq!(analysis.found_characters.len(), 1);
    }

    #[test]
    fn unlisted_non_han_blocks_classify_as_new() {
        let analysis = fixture().classify("愛あΩ");
        assert_eq!(analysis.new_characters, vec!['あ', 'Ω']);
    }

    #[test]
    fn lists_cover_exactly_the_classifiable_distinct_characters() {
        let lexicon = fixture();
        let text = "我愛你 sing 唱歌！愛";
        let analysis = lexicon.classify(text);

        let mut classified: Vec<char> = analysis.new_characters.clone();
        classified.extend(analysis.found_characters.iter().map(|e| e.character));

        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        for c in text.chars() {
            if seen.insert(c) && !charset::is_skipped(c) {
                expected.push(c);
            }
        }

        classified.sort_unstable();
        expected.sort_unstable();
        assert_eq!(classified, expected);

        // Disjoint: nothing classified as new is also found.
        for c in &analysis.new_characters {
            assert!(!lexicon.contains(*c));
        }
    }
}
