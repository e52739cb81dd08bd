//! Skip policy for character classification.
//!
//! The reference data curates Han characters used in Cantonese lyrics;
//! Latin letters, digits, punctuation, and common symbol blocks are never
//! lookup candidates.

/// Inclusive code-point range excluded from classification.
#[derive(Debug, Clone, Copy)]
pub struct SkipRange {
    pub first: u32,
    pub last: u32,
    pub block: &'static str,
}

/// Blocks excluded from classification, in code-point order.
///
/// Blocks not listed here are NOT skipped, even when they are clearly
/// not Han script (kana, enclosed characters, CJK-adjacent symbols);
/// such characters classify as unknown.
#[rustfmt::skip]
pub const SKIP_RANGES: &[SkipRange] = &[
    SkipRange { first: 0x0000, last: 0x007F, block: "Basic Latin" },
    SkipRange { first: 0x00A0, last: 0x024F, block: "Latin-1 Supplement through Latin Extended-B" },
    SkipRange { first: 0x2000, last: 0x206F, block: "General Punctuation" },
    SkipRange { first: 0x20A0, last: 0x20CF, block: "Currency Symbols" },
    SkipRange { first: 0xFE30, last: 0xFE4F, block: "CJK Compatibility Forms" },
    SkipRange { first: 0xFE50, last: 0xFE6F, block: "Small Form Variants" },
    SkipRange { first: 0xFF00, last: 0xFFEF, block: "Halfwidth and Fullwidth Forms" },
];

/// Whether `c` is excluded from classification entirely.
///
/// Whitespace outside the listed blocks (ideographic space, line
/// separators) is skipped as well.
pub fn is_skipped(c: char) -> bool {
    if c.is_whitespace() {
        return true;
    }
    let code = c as u32;
    SKIP_RANGES
        .iter()
        .any(|range| (range.first..=range.last).contains(&code))
}
