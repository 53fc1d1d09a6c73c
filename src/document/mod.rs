/*!
 * Document modeling for XLIFF translation interchange.
 *
 * This module provides the object model for a translation file that enables:
 * - Lookup of translation units by id and by translated text
 * - Recovery of orphaned units after hierarchical id renames
 * - In-place mutation with duplicate-id protection
 * - Round-trip persistence to an XLIFF-style XML file
 */

pub mod model;

// Re-export types used by other modules
pub use model::{
    TransUnit, TransUnitNote, TransUnitVariant, TranslationState, XliffDocument, XliffFile,
};
