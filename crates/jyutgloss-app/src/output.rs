use std::fmt::Write;

use jyutgloss_core::lexicon::Lexicon;
use jyutgloss_core::types::{CharacterAnalysis, CharacterEntry, LineTranslation, LyricsReport};

pub fn format_translation(lines: &[LineTranslation]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "{}", line.original_line);
        let _ = writeln!(out, "  {}", line.translated_line);
    }
    out
}

pub fn format_entry(entry: &CharacterEntry) -> String {
    if entry.pronunciation.is_empty() {
        format!("{}  {}", entry.character, entry.definition)
    } else {
        format!("{}  [{}]  {}", entry.character, entry.pronunciation, entry.definition)
    }
}

pub fn format_analysis(analysis: &CharacterAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Known characters ({}):", analysis.found_characters.len());
    for entry in &analysis.found_characters {
        let _ = writeln!(out, "  {}", format_entry(entry));
    }

    let _ = writeln!(out, "New characters ({}):", analysis.new_characters.len());
    if analysis.new_characters.is_empty() {
        let _ = writeln!(out, "  (none)");
    } else {
        let rendered: Vec<String> = analysis
            .new_characters
            .iter()
            .map(char::to_string)
            .collect();
        let _ = writeln!(out, "  {}", rendered.join(" "));
    }

    out
}

pub fn format_suggestions(entries: &[CharacterEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Suggested definitions ({}):", entries.len());
    for entry in entries {
        let _ = writeln!(out, "  {}", format_entry(entry));
    }
    out
}

pub fn format_report(report: &LyricsReport) -> String {
    let mut out = format_translation(&report.translation);
    out.push('\n');
    out.push_str(&format_analysis(&report.analysis));
    if !report.suggested_definitions.is_empty() {
        out.push('\n');
        out.push_str(&format_suggestions(&report.suggested_definitions));
    }
    out
}

pub fn format_lookups(lexicon: &Lexicon, characters: &str) -> String {
    let mut out = String::new();
    for c in characters.chars().filter(|c| !c.is_whitespace()) {
        match lexicon.get(c) {
            Some(entry) => {
                let _ = writeln!(out, "{}", format_entry(entry));
            }
            None => {
                let _ = writeln!(out, "{c}  (not in reference data)");
            }
        }
    }
    out
}
