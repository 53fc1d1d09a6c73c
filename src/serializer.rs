/*!
 * XML serialization of the XLIFF document model.
 *
 * The mapping between model fields and the persisted schema is declared on
 * the model types via serde rename attributes and summarized here:
 *
 * | Model field                      | XML                                  | Optionality        |
 * |----------------------------------|--------------------------------------|--------------------|
 * | `XliffDocument::version`         | `<xliff version="...">` attribute    | defaults to "2.0"  |
 * | `XliffDocument::xmlns`           | `<xliff xmlns="...">` attribute      | optional           |
 * | `XliffDocument::file`            | `<file>` element                     | required           |
 * | `XliffFile::original`            | `<file original="...">`              | optional           |
 * | `XliffFile::source_language`     | `<file source-language="...">`       | optional           |
 * | `XliffFile::target_language`     | `<file target-language="...">`       | optional           |
 * | `XliffFile::datatype`            | `<file datatype="...">`              | optional           |
 * | `XliffFile::product_version`     | `<file product-version="...">`       | optional           |
 * | `XliffFile::trans_units`         | `<trans-unit>` elements, in order    | zero or more       |
 * | `TransUnit::id`                  | `<trans-unit id="...">` attribute    | required           |
 * | `TransUnit::notes`               | `<note>` elements, in order          | zero or more       |
 * | `TransUnit::variants`            | `<variant>` elements, in order       | zero or more       |
 * | `TransUnitNote::lang`            | `<note lang="...">` attribute        | optional           |
 * | `TransUnitNote::text`            | `<note>` text content                | may be empty       |
 * | `TransUnitVariant::lang`         | `<variant lang="...">` attribute     | required           |
 * | `TransUnitVariant::state`        | `<variant state="...">` attribute    | optional           |
 * | `TransUnitVariant::value`        | `<variant>` text content             | may be empty       |
 *
 * Reading then saving a file reproduces the same units, ids, variants and
 * ordering; whitespace and attribute order are not preserved byte for byte.
 */

use quick_xml::de;
use quick_xml::se::Serializer;
use serde::Serialize;

use crate::document::XliffDocument;
use crate::errors::XliffError;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const ROOT_TAG: &str = "xliff";

/// Serialize a document to an indented XML string with a leading
/// XML declaration.
pub fn to_xml_string(document: &XliffDocument) -> Result<String, XliffError> {
    let mut xml = String::from(XML_DECLARATION);
    let mut ser = Serializer::with_root(&mut xml, Some(ROOT_TAG))?;
    ser.indent(' ', 2);
    document.serialize(ser)?;
    xml.push('\n');
    Ok(xml)
}

/// Parse XML content into a document.
///
/// Parsing is all-or-nothing: any structural problem fails the whole load
/// and no partial document is produced.
pub fn from_xml_str(content: &str) -> Result<XliffDocument, XliffError> {
    let document: XliffDocument = de::from_str(content)?;
    Ok(document)
}
