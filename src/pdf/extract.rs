//! Page-ordered PDF text extraction

use std::path::Path;

use lopdf::Document;

/// Stored in place of extracted text when a PDF yields none
pub const NO_TEXT_FALLBACK: &str = "No text content could be extracted from this PDF.";

/// Extract the text of every page of the PDF at `path`, concatenated in
/// page order with no separator.
///
/// Returns [`NO_TEXT_FALLBACK`] when the concatenated result is empty or
/// all-whitespace (image-only PDFs, empty pages). A file that cannot be
/// opened or parsed as a PDF is an error.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String, lopdf::Error> {
    let document = Document::load(path)?;

    // get_pages() keys ascend in document order
    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        text.push_str(&document.extract_text(&[*page_number])?);
    }

    if text.trim().is_empty() {
        return Ok(NO_TEXT_FALLBACK.to_string());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a PDF with one page per entry in `page_texts`; an empty entry
    /// produces a page with no text operators.
    fn build_pdf(page_texts: &[&str]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn save_pdf(mut doc: Document) -> tempfile::TempPath {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        doc.save_to(&mut file).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn test_extracts_pages_in_document_order() {
        let path = save_pdf(build_pdf(&["first page text", "second page text"]));

        let text = extract_text(&path).unwrap();

        let first = text.find("first page text").unwrap();
        let second = text.find("second page text").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_pdf_yields_fallback_literal() {
        let path = save_pdf(build_pdf(&[""]));

        let text = extract_text(&path).unwrap();

        assert_eq!(text, NO_TEXT_FALLBACK);
    }

    #[test]
    fn test_non_pdf_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        file.write_all(b"this is not a pdf").unwrap();
        let path = file.into_temp_path();

        assert!(extract_text(&path).is_err());
    }
}
