/*!
 * Core document model types for XLIFF translation interchange.
 *
 * These types form an exclusive-ownership tree: a document owns one file,
 * the file owns its translation units, and each unit owns its language
 * variants. There are no back-references and no sharing, so the model can
 * be mutated in place and serialized as a plain tree.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::XliffError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::serializer;

/// Schema version written to new documents.
pub const DEFAULT_VERSION: &str = "2.0";

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Returns the leaf component of a unit id, the part after the final `.`.
///
/// Ids without a separator are their own leaf.
fn id_leaf(id: &str) -> &str {
    id.rsplit_once('.').map_or(id, |(_, leaf)| leaf)
}

/// Complete XLIFF document with schema metadata and one file of units.
///
/// This is the root of the model and the public API surface: lookups and
/// mutations forward to the owned [`XliffFile`], and `save`/`read` move the
/// whole graph to and from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "xliff")]
pub struct XliffDocument {
    /// Schema version, "2.0" unless the source file says otherwise
    #[serde(rename = "@version", default = "default_version")]
    pub version: String,

    /// Namespace declaration carried over from the source file, if any
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,

    /// The single file of translation units owned by this document
    #[serde(rename = "file")]
    pub file: XliffFile,
}

impl XliffDocument {
    /// Create a new, empty document at the default schema version.
    pub fn new() -> Self {
        XliffDocument {
            version: default_version(),
            xmlns: None,
            file: XliffFile::default(),
        }
    }

    /// Get the translation unit for the specified id, or `None` if absent.
    pub fn trans_unit_for_id(&self, id: &str) -> Option<&TransUnit> {
        self.file.trans_unit_for_id(id)
    }

    /// Find the best candidate for a unit whose id prefix was renamed.
    ///
    /// See [`XliffFile::trans_unit_for_orphan`] for the matching rules and
    /// their limitations.
    pub fn trans_unit_for_orphan(&self, orphan: &TransUnit) -> Option<&TransUnit> {
        self.file.trans_unit_for_orphan(orphan)
    }

    /// Iterate over every unit whose variant for `lang` equals `text`.
    ///
    /// The comparison is exact and case-sensitive, and results follow file
    /// order. The returned iterator borrows the document; call again for a
    /// fresh pass.
    pub fn trans_units_for_text_in_lang<'a>(
        &'a self,
        lang: &'a str,
        text: &'a str,
    ) -> impl Iterator<Item = &'a TransUnit> + 'a {
        self.file
            .trans_units
            .iter()
            .filter(move |tu| tu.variant_for_lang(lang).is_some_and(|v| v.value == text))
    }

    /// All distinct language tags appearing in the document, in the order
    /// they are first seen walking units then variants.
    pub fn all_variant_languages_found(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut languages = Vec::new();

        for tu in &self.file.trans_units {
            for variant in &tu.variants {
                if seen.insert(variant.lang.as_str()) {
                    languages.push(variant.lang.clone());
                }
            }
        }

        languages
    }

    /// Add the specified translation unit.
    ///
    /// Returns `true` if the unit was added, `false` if its id is empty or
    /// already present in the file.
    pub fn add_trans_unit(&mut self, tu: TransUnit) -> bool {
        self.file.add_trans_unit(tu)
    }

    /// Remove the unit with the same id as `tu`. No-op if absent.
    pub fn remove_trans_unit(&mut self, tu: &TransUnit) {
        self.file.remove_trans_unit(tu);
    }

    /// Share of units carrying a variant for `lang`, as a percentage.
    pub fn translation_progress(&self, lang: &str) -> f32 {
        let total = self.file.trans_units.len();
        if total == 0 {
            return 100.0;
        }
        let translated = self.file.variant_count_for_lang(lang);
        (translated as f32 / total as f32) * 100.0
    }

    /// Serialize the document to the given path, overwriting any existing
    /// file there. Parent directories are created as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), XliffError> {
        let path = path.as_ref();
        let xml = serializer::to_xml_string(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, xml)?;

        debug!("Saved XLIFF document with {} unit(s) to {}", self.file.trans_units.len(), path.display());
        Ok(())
    }

    /// Read the specified XLIFF file into a document.
    ///
    /// Fails with [`XliffError::FileNotFound`] before any parse attempt if
    /// the path does not exist; a parse failure is propagated unchanged and
    /// never yields a partial document.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<XliffDocument, XliffError> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Err(XliffError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let document = serializer::from_xml_str(&content)?;

        debug!("Loaded XLIFF document with {} unit(s) from {}", document.file.trans_units.len(), path.display());
        Ok(document)
    }
}

impl Default for XliffDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// One logical source file's worth of translation units.
///
/// Unit order is preserved from the source file and is meaningful: saving a
/// freshly read document reproduces the same unit sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XliffFile {
    /// Path or name of the file the source strings were extracted from
    #[serde(rename = "@original", skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    /// Language the source strings are written in
    #[serde(rename = "@source-language", skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// Language this file is being translated into
    #[serde(rename = "@target-language", skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,

    /// Datatype hint for downstream tools (e.g. "plaintext")
    #[serde(rename = "@datatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    /// Version of the product the strings were extracted from
    #[serde(rename = "@product-version", skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,

    /// Ordered translation units; ids are unique within the file
    #[serde(rename = "trans-unit", default)]
    pub trans_units: Vec<TransUnit>,
}

impl XliffFile {
    /// Get the translation unit whose id equals `id` exactly.
    pub fn trans_unit_for_id(&self, id: &str) -> Option<&TransUnit> {
        self.trans_units.iter().find(|tu| tu.id == id)
    }

    /// Add a translation unit, keeping ids unique.
    ///
    /// The unit is appended iff its id is non-empty and no existing unit
    /// shares it. A colliding id leaves the file unchanged and returns
    /// `false`; the caller decides what to do about the conflict.
    pub fn add_trans_unit(&mut self, tu: TransUnit) -> bool {
        if tu.id.is_empty() {
            debug!("Rejected translation unit with empty id");
            return false;
        }
        if self.trans_unit_for_id(&tu.id).is_some() {
            debug!("Rejected duplicate translation unit id: {}", tu.id);
            return false;
        }

        self.trans_units.push(tu);
        true
    }

    /// Remove the unit with the same id as `tu`. No-op if absent.
    pub fn remove_trans_unit(&mut self, tu: &TransUnit) {
        self.trans_units.retain(|existing| existing.id != tu.id);
    }

    /// Find the best candidate for a unit whose id prefix was renamed.
    ///
    /// When ids change after translations already exist, the common case is
    /// that only the hierarchical part before the final `.` moved while the
    /// leaf name stayed put. This searches for a unit with the same leaf
    /// component as `orphan` but a different full id, and returns the first
    /// one in file order.
    ///
    /// This is a best-effort suggestion, not a guaranteed remap: it only
    /// covers leaf-preserving renames, and when several units share the
    /// leaf the first match wins with no further tie-break.
    pub fn trans_unit_for_orphan(&self, orphan: &TransUnit) -> Option<&TransUnit> {
        let leaf = id_leaf(&orphan.id);
        self.trans_units
            .iter()
            .find(|tu| tu.id != orphan.id && id_leaf(&tu.id) == leaf)
    }

    /// Number of units carrying a variant for `lang`.
    pub fn variant_count_for_lang(&self, lang: &str) -> usize {
        self.trans_units
            .iter()
            .filter(|tu| tu.variant_for_lang(lang).is_some())
            .count()
    }

    /// Check if the file holds no units.
    pub fn is_empty(&self) -> bool {
        self.trans_units.is_empty()
    }
}

/// A single translatable string with one value per language.
///
/// The id is the stable cross-release identity of the string and may encode
/// a hierarchical path with `.` separators, e.g. `"Dialog1.OkButton.text"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransUnit {
    /// Unique identifier within the owning file
    #[serde(rename = "@id")]
    pub id: String,

    /// Translator-facing annotations
    #[serde(rename = "note", default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<TransUnitNote>,

    /// Per-language values, at most one per distinct language tag
    #[serde(rename = "variant", default)]
    pub variants: Vec<TransUnitVariant>,
}

impl TransUnit {
    /// Create a new unit with no variants.
    pub fn new(id: &str) -> Self {
        TransUnit {
            id: id.to_string(),
            notes: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Builder-style helper to attach a variant.
    pub fn with_variant(mut self, variant: TransUnitVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Get the first variant whose language tag equals `lang` exactly.
    pub fn variant_for_lang(&self, lang: &str) -> Option<&TransUnitVariant> {
        self.variants.iter().find(|v| v.lang == lang)
    }

    /// Get the variant for `lang`, falling back to any variant of the same
    /// language family.
    ///
    /// The fallback lets a lookup for "fr-CA" land on a plain "fr" variant
    /// (and vice versa) when no exact match exists.
    pub fn variant_for_lang_or_family(&self, lang: &str) -> Option<&TransUnitVariant> {
        self.variant_for_lang(lang).or_else(|| {
            self.variants
                .iter()
                .find(|v| language_utils::language_tags_match(&v.lang, lang))
        })
    }

    /// Append a variant without looking at existing languages.
    pub fn add_variant(&mut self, variant: TransUnitVariant) {
        self.variants.push(variant);
    }

    /// Replace the variant sharing `variant`'s language, or append if there
    /// is none. Keeps the one-variant-per-language shape lookups rely on.
    pub fn add_or_replace_variant(&mut self, variant: TransUnitVariant) {
        match self.variants.iter_mut().find(|v| v.lang == variant.lang) {
            Some(existing) => *existing = variant,
            None => self.variants.push(variant),
        }
    }

    /// Attach a translator note.
    pub fn add_note(&mut self, note: TransUnitNote) {
        self.notes.push(note);
    }
}

/// One language's value for a translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransUnitVariant {
    /// Language tag, BCP-47 style (e.g. "en", "fr-CA")
    #[serde(rename = "@lang")]
    pub lang: String,

    /// Translation workflow state, if tracked
    #[serde(rename = "@state", skip_serializing_if = "Option::is_none")]
    pub state: Option<TranslationState>,

    /// The translated (or source) string
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl TransUnitVariant {
    /// Create a new variant with no workflow state.
    pub fn new(lang: &str, value: &str) -> Self {
        TransUnitVariant {
            lang: lang.to_string(),
            state: None,
            value: value.to_string(),
        }
    }

    /// Builder-style helper to set the workflow state.
    pub fn with_state(mut self, state: TranslationState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Translator-facing annotation attached to a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransUnitNote {
    /// Language the note itself is written in, if stated
    #[serde(rename = "@lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Note text
    #[serde(rename = "$text", default)]
    pub text: String,
}

impl TransUnitNote {
    /// Create a note with no language tag.
    pub fn new(text: &str) -> Self {
        TransUnitNote {
            lang: None,
            text: text.to_string(),
        }
    }
}

/// Workflow state of a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationState {
    /// Freshly extracted, untouched
    New,
    /// Flagged for (re-)translation
    NeedsTranslation,
    /// Translated but not signed off
    Translated,
    /// Signed off
    Final,
}
