/*!
 * Tests for the XLIFF document model public API
 */

use xliffdoc::{TransUnit, TransUnitVariant, TranslationState, XliffDocument};

fn unit(id: &str, lang: &str, value: &str) -> TransUnit {
    TransUnit::new(id).with_variant(TransUnitVariant::new(lang, value))
}

/// Test that lookup by id finds exactly the requested unit
#[test]
fn test_trans_unit_for_id_withKnownId_shouldReturnUnit() {
    let mut doc = XliffDocument::new();
    doc.add_trans_unit(unit("a.b.c", "en", "one"));
    doc.add_trans_unit(unit("a.b.d", "en", "two"));

    let found = doc.trans_unit_for_id("a.b.c");
    assert_eq!(found.map(|tu| tu.id.as_str()), Some("a.b.c"));
}

/// Test that lookup by id reports absence as None, not an error
#[test]
fn test_trans_unit_for_id_withUnknownId_shouldReturnNone() {
    let mut doc = XliffDocument::new();
    doc.add_trans_unit(unit("a.b.c", "en", "one"));

    assert!(doc.trans_unit_for_id("missing").is_none());
}

/// Test that adding a unit with a taken id is rejected without mutation
#[test]
fn test_add_trans_unit_withDuplicateId_shouldReturnFalse() {
    let mut doc = XliffDocument::new();
    assert!(doc.add_trans_unit(unit("x", "en", "kept")));
    assert!(!doc.add_trans_unit(unit("x", "en", "rejected")));

    assert_eq!(doc.file.trans_units.len(), 1);
    let kept = doc.trans_unit_for_id("x").and_then(|tu| tu.variant_for_lang("en"));
    assert_eq!(kept.map(|v| v.value.as_str()), Some("kept"));
}

/// Test that removal is id-based and tolerates absent units
#[test]
fn test_remove_trans_unit_withAbsentUnit_shouldBeNoOp() {
    let mut doc = XliffDocument::new();
    doc.add_trans_unit(unit("keep", "en", "one"));
    doc.add_trans_unit(unit("drop", "en", "two"));

    doc.remove_trans_unit(&TransUnit::new("drop"));
    doc.remove_trans_unit(&TransUnit::new("never-there"));

    assert_eq!(doc.file.trans_units.len(), 1);
    assert!(doc.trans_unit_for_id("keep").is_some());
}

/// Test the orphan heuristic on a prefix rename
#[test]
fn test_trans_unit_for_orphan_withRenamedPrefix_shouldSuggestExistingUnit() {
    let mut doc = XliffDocument::new();
    doc.add_trans_unit(unit("Section1.Header", "en", "Header"));

    let probe = TransUnit::new("Section2.Header");
    let suggestion = doc.trans_unit_for_orphan(&probe);
    assert_eq!(suggestion.map(|tu| tu.id.as_str()), Some("Section1.Header"));

    let unrelated = TransUnit::new("Section1.Footer");
    assert!(doc.trans_unit_for_orphan(&unrelated).is_none());
}

/// Test text search in a language across the whole document
#[test]
fn test_trans_units_for_text_in_lang_shouldReturnMatchesInFileOrder() {
    let mut doc = XliffDocument::new();
    doc.add_trans_unit(unit("first", "en", "Hello"));
    doc.add_trans_unit(unit("second", "en", "World"));
    doc.add_trans_unit(unit("third", "en", "Hello"));

    let ids: Vec<&str> = doc
        .trans_units_for_text_in_lang("en", "Hello")
        .map(|tu| tu.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "third"]);

    let empty: Vec<&TransUnit> = doc.trans_units_for_text_in_lang("en", "Nope").collect();
    assert!(empty.is_empty());
}

/// Test language enumeration across units
#[test]
fn test_all_variant_languages_found_shouldListFirstSeenOrder() {
    let mut doc = XliffDocument::new();
    let mut first = TransUnit::new("one");
    first.add_variant(TransUnitVariant::new("en", "a"));
    first.add_variant(TransUnitVariant::new("fr", "b"));
    let mut second = TransUnit::new("two");
    second.add_variant(TransUnitVariant::new("en", "c"));
    second.add_variant(TransUnitVariant::new("de", "d"));
    doc.add_trans_unit(first);
    doc.add_trans_unit(second);

    assert_eq!(doc.all_variant_languages_found(), vec!["en", "fr", "de"]);
}

/// Test that replacing a variant keeps one value per language
#[test]
fn test_add_or_replace_variant_shouldUpdateExistingLanguage() {
    let mut tu = TransUnit::new("status.label");
    tu.add_variant(TransUnitVariant::new("fr", "brouillon"));

    tu.add_or_replace_variant(
        TransUnitVariant::new("fr", "final").with_state(TranslationState::Final),
    );

    assert_eq!(tu.variants.len(), 1);
    let variant = tu.variant_for_lang("fr").unwrap();
    assert_eq!(variant.value, "final");
    assert_eq!(variant.state, Some(TranslationState::Final));
}
