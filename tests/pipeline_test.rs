//! Integration tests for acquisition and the full pipeline, using
//! synthetic PDFs built in memory with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use lexpdf::{acquire, extract_bytes, JsonFormat, SourceType};

/// Build a PDF with one page per entry, each page showing its text as a
/// single text run.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize PDF");
    bytes
}

#[test]
fn test_digital_classification() {
    let pdf = build_pdf(&["The quick fox jumps over the lazy dog"]);
    let (layout, source) = acquire(&pdf).unwrap();

    assert_eq!(source, SourceType::Digital);
    assert_eq!(layout.page_count(), 1);
    let page = layout.get_page(1).unwrap();
    assert!(!page.is_empty());
    assert!(page.paragraphs.join("\n").contains("quick"));
}

#[test]
fn test_digital_pages_in_document_order() {
    let pdf = build_pdf(&["alpha opening", "beta middle", "gamma closing"]);
    let (layout, source) = acquire(&pdf).unwrap();

    assert_eq!(source, SourceType::Digital);
    assert_eq!(layout.page_count(), 3);
    let numbers: Vec<u32> = layout.pages().iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(layout.get_page(2).unwrap().paragraphs.join(" ").contains("beta"));
}

#[test]
fn test_blank_page_in_digital_document() {
    // Whitespace-only text layer on page 2; page 1 carries ink, so the
    // whole document classifies digital and page 2 gets zero paragraphs.
    let pdf = build_pdf(&["Visible content here", "   "]);
    let (layout, source) = acquire(&pdf).unwrap();

    assert_eq!(source, SourceType::Digital);
    assert_eq!(layout.page_count(), 2);
    assert!(!layout.get_page(1).unwrap().is_empty());
    assert!(layout.get_page(2).unwrap().is_empty());
}

#[test]
fn test_blank_page_kept_in_word_tree_with_empty_contents() {
    let pdf = build_pdf(&["Visible content here", "   "]);
    let output = extract_bytes(&pdf).unwrap();

    assert_eq!(output.tree.page_count(), 2);
    assert!(output.tree.pages()[1].is_empty());

    let json = output.to_json(JsonFormat::Compact).unwrap();
    assert!(json.contains(r#""Page 2":{}"#));
}

#[test]
fn test_zero_page_document_is_digital_without_ocr() {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();

    // Must not fall through to OCR: succeeds even where no OCR tools
    // are installed, tagged digital with an empty layout.
    let (layout, source) = acquire(&bytes).unwrap();
    assert_eq!(source, SourceType::Digital);
    assert!(layout.is_empty());
}

#[test]
fn test_non_pdf_bytes_fail_both_strategies() {
    let result = acquire(b"this is definitely not a pdf document");
    assert!(result.is_err());
}

#[test]
fn test_full_pipeline_digital() {
    let pdf = build_pdf(&["The quick fox jumps over the lazy dog"]);
    let output = extract_bytes(&pdf).unwrap();

    assert_eq!(output.source, SourceType::Digital);
    assert!(!output.is_empty());

    let words: Vec<&str> = output.tree.pages()[0]
        .paragraphs
        .iter()
        .flat_map(|p| p.words.iter().map(String::as_str))
        .collect();
    assert!(words.contains(&"fox"));
    assert!(words.contains(&"quick"));
    // "the" and "over" are function words
    assert!(!words.contains(&"the"));
    assert!(!words.contains(&"over"));
}

#[test]
fn test_full_pipeline_stop_words_only_is_empty_not_error() {
    let pdf = build_pdf(&["the of and it was"]);
    let output = extract_bytes(&pdf).unwrap();

    assert_eq!(output.source, SourceType::Digital);
    assert!(output.is_empty());
    assert_eq!(output.tree.page_count(), 1);
}

#[test]
fn test_json_artifact_shape() {
    let pdf = build_pdf(&["The quick fox jumps over the lazy dog"]);
    let output = extract_bytes(&pdf).unwrap();
    let json = output.to_json(JsonFormat::Pretty).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let page = value.get("Page 1").expect("page entry");
    let paragraph = page.get("Paragraph 1").expect("paragraph entry");
    assert!(paragraph.is_array());
    assert!(paragraph
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w == "fox"));
}
