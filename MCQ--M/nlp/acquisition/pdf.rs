use lopdf::Document;

use crate::error::{McqError, McqResult};

/// Extracts the text of every page in page order, concatenated without a
/// separator.
///
/// Pages without a text layer contribute nothing; a page whose content
/// stream cannot be decoded fails the whole document.
pub fn extract_pdf_text(bytes: &[u8]) -> McqResult<String> {
    let doc = Document::load_mem(bytes)?;
    if doc.is_encrypted() {
        return Err(McqError::Extraction(
            "document is encrypted and cannot be read".into(),
        ));
    }
    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc.extract_text(&[*page_number]).map_err(|err| {
            McqError::Extraction(format!("page {page_number}: {err}"))
        })?;
        // The extractor closes every text object with a newline.
        text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{
        content::{Content, Operation},
        dictionary, Object, Stream,
    };

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
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
        for body in pages {
            let operations = if body.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*body)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }
        let count = i64::try_from(kids.len()).unwrap();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn pages_are_concatenated_in_order() {
        let bytes = build_pdf(&["Rivers carve canyons.", "Glaciers move slowly."]);
        let text = extract_pdf_text(&bytes).unwrap();
        let first = text.find("Rivers carve canyons.").unwrap();
        let second = text.find("Glaciers move slowly.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn pages_join_without_separator() {
        let bytes = build_pdf(&["Rivers carve canyons", "Glaciers move slowly"]);
        assert_eq!(
            extract_pdf_text(&bytes).unwrap(),
            "Rivers carve canyonsGlaciers move slowly"
        );
    }

    #[test]
    fn page_without_text_contributes_nothing() {
        let bytes = build_pdf(&["Alpha", "", "Omega"]);
        assert_eq!(extract_pdf_text(&bytes).unwrap(), "AlphaOmega");
    }

    #[test]
    fn corrupt_document_is_an_extraction_error() {
        let err = extract_pdf_text(b"%PDF-1.5 definitely not a document").unwrap_err();
        assert_eq!(err.code(), "extraction_failed");
    }
}
