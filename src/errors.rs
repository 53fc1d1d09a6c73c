/*!
 * Error types for the xliffdoc library.
 *
 * This module contains custom error types for the load and save paths,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving an XLIFF document.
///
/// Lookup operations never produce an error; absence is always reported as
/// `None` or an empty sequence. A duplicate id on insert is reported as a
/// `false` return from `add_trans_unit`, not as an error.
#[derive(Error, Debug)]
pub enum XliffError {
    /// `read` was called on a path that does not exist
    #[error("XLIFF file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file content could not be parsed into the document model,
    /// or the model could not be serialized to XML
    #[error("Malformed XLIFF content: {0}")]
    Malformed(#[from] quick_xml::DeError),

    /// Error from a file operation
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}
