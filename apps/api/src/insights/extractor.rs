//! Section Extractor — slices model output into sections by heading markers.
//!
//! For each section the first heading variant found in the text wins. The section body runs
//! from just after that heading to the next recognized heading (any variant of any section)
//! or to the end of the text. Bodies that are too short or that echo boilerplate are dropped;
//! callers treat a missing key as "no content".

use std::collections::BTreeMap;

use crate::insights::domains::SectionSpec;

/// Bodies shorter than this (in characters, after trimming) are discarded.
pub const MIN_SECTION_CHARS: usize = 20;

/// Substrings that mean the model wrote boilerplate instead of content. Matched case-insensitively.
pub const PLACEHOLDER_MARKERS: &[&str] = &["completed successfully", "generated", "available"];

pub fn extract_sections(text: &str, sections: &[SectionSpec]) -> BTreeMap<String, String> {
    let mut found = BTreeMap::new();

    for section in sections {
        let Some((_, body_start)) = find_heading(text, section.variants) else {
            continue;
        };
        let body_end = next_heading_at(text, body_start, sections);
        let body = clean_body(&text[body_start..body_end]);

        if is_usable(body) {
            found.insert(section.key.to_string(), body.to_string());
        }
    }

    found
}

/// Returns `(heading_start, body_start)` for the first variant present in `text`.
fn find_heading(text: &str, variants: &[&str]) -> Option<(usize, usize)> {
    variants
        .iter()
        .find_map(|v| text.find(v).map(|pos| (pos, pos + v.len())))
}

/// Byte offset of the earliest recognized heading at or after `from`, or the end of text.
fn next_heading_at(text: &str, from: usize, sections: &[SectionSpec]) -> usize {
    let tail = &text[from..];
    sections
        .iter()
        .flat_map(|s| s.variants.iter())
        .filter_map(|v| tail.find(v))
        .min()
        .map(|offset| from + offset)
        .unwrap_or(text.len())
}

/// Strips heading leftovers (`:`, stray emphasis) and the decorations of the next heading
/// (`#`, `-`, `*`, emoji) that precede its text.
fn clean_body(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '*')
        .trim_end_matches(is_heading_decoration)
}

fn is_heading_decoration(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, '#' | '-' | '*')
        || (!c.is_ascii() && !c.is_alphanumeric() && !TRAILING_PUNCTUATION.contains(&c))
}

/// Non-ASCII characters that legitimately end a sentence.
const TRAILING_PUNCTUATION: &[char] = &['”', '’', '…', '»', '」', '。'];

fn is_usable(body: &str) -> bool {
    if body.chars().count() < MIN_SECTION_CHARS {
        return false;
    }
    let lower = body.to_lowercase();
    !PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
}
