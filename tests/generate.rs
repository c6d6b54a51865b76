//! End-to-end generation of the specification document.

use quick_xml::Reader;
use quick_xml::events::Event;
use specdoc::{Packager, Theme, build_document, generate};
use std::fs::File;
use std::io::{Read, Seek};

const EXPECTED_PARTS: &[&str] = &[
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/core.xml",
    "docProps/app.xml",
    "word/document.xml",
    "word/_rels/document.xml.rels",
    "word/styles.xml",
    "word/numbering.xml",
    "word/header1.xml",
    "word/footer1.xml",
];

fn read_part<R: Read + Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn element_count(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) | Ok(Event::Empty(_)) => count += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("malformed XML: {}", e),
        }
    }
    count
}

#[test]
fn test_generate_writes_complete_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(specdoc::DEFAULT_OUTPUT);

    let tree = build_document(&Theme::default()).unwrap();
    Packager::save(&tree, &path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    for part in EXPECTED_PARTS {
        let xml = read_part(&mut archive, part);
        assert!(element_count(&xml) > 0, "{} has no elements", part);
    }

    let document = read_part(&mut archive, "word/document.xml");
    assert!(document.contains("1. Document Control"));
    assert!(document.contains("SPEC-HCP-MCP-001"));
    assert!(document.contains("Appendix D: Quick Reference Commands"));
    assert!(document.contains("YOUR_HOUSECALLPRO_API_KEY"));
    assert!(!document.contains("2d48531bbf"));

    let header = read_part(&mut archive, "word/header1.xml");
    assert!(header.contains("HouseCall Pro MCP Server — Technical Specification"));
    let footer = read_part(&mut archive, "word/footer1.xml");
    assert!(footer.contains(" NUMPAGES "));
}

#[test]
fn test_generate_is_repeatable() {
    let theme = Theme::default();
    let first = generate(&theme).unwrap();
    let second = generate(&theme).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_theme_override_changes_output() {
    let theme = Theme::from_yaml_str("body_font: Helvetica\n").unwrap();
    let bytes = generate(&theme).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let styles = read_part(&mut archive, "word/styles.xml");
    assert!(styles.contains(r#"w:ascii="Helvetica""#));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.docx");
    let tree = build_document(&Theme::default()).unwrap();
    let result = Packager::save(&tree, &path);
    assert!(matches!(result, Err(specdoc::Error::Io(_))));
    assert!(!path.exists());
}
