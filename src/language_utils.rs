use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language tag utilities for XLIFF language identifiers
///
/// XLIFF carries BCP-47 style tags ("en", "fr-CA", "zh-Hans"). This module
/// provides functions for checking tag shape, extracting the primary
/// language subtag, and matching tags that name the same language even when
/// they differ in region, script, or 2-vs-3-letter code form.
// @const: BCP-47 tag shape (primary subtag plus dash-separated subtags)
static LANGUAGE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap()
});

/// Check whether a tag is shaped like a BCP-47 language tag.
///
/// This is a syntactic check only; it does not consult the language
/// registry, so well-formed but unassigned tags pass.
pub fn is_well_formed_tag(tag: &str) -> bool {
    LANGUAGE_TAG_REGEX.is_match(tag.trim())
}

/// The primary language subtag of a tag, i.e. everything before the
/// first `-`.
pub fn primary_subtag(tag: &str) -> &str {
    let tag = tag.trim();
    tag.split_once('-').map_or(tag, |(primary, _)| primary)
}

/// Resolve a primary subtag to a language via ISO 639-1 (2-letter) or
/// ISO 639-3 (3-letter)
fn lookup_language(code: &str) -> Option<Language> {
    let normalized = code.to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
}

/// Check if two tags name the same primary language.
///
/// Region and script subtags are ignored, so "fr" matches "fr-CA", and
/// 2-letter and 3-letter code forms of one language match each other.
pub fn language_tags_match(tag1: &str, tag2: &str) -> bool {
    let primary1 = primary_subtag(tag1);
    let primary2 = primary_subtag(tag2);

    if primary1.eq_ignore_ascii_case(primary2) {
        return !primary1.is_empty();
    }

    match (lookup_language(primary1), lookup_language(primary2)) {
        (Some(lang1), Some(lang2)) => lang1 == lang2,
        _ => false,
    }
}

/// Get the English language name for a tag
pub fn language_name(tag: &str) -> Result<String> {
    let primary = primary_subtag(tag);
    let lang = lookup_language(primary)
        .ok_or_else(|| anyhow!("Unknown language tag: {}", tag))?;

    Ok(lang.to_name().to_string())
}
