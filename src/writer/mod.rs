//! DOCX packaging.
//!
//! [`Packager`] serializes a [`DocumentTree`] into the XML parts of a
//! WordprocessingML package and zips them:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! docProps/core.xml
//! docProps/app.xml
//! word/document.xml
//! word/_rels/document.xml.rels
//! word/styles.xml
//! word/numbering.xml      (only when the tree defines lists)
//! word/header1.xml
//! word/footer1.xml
//! ```
//!
//! The tree is only read. Identical trees produce identical archive bytes.

pub mod constants;
mod document;
mod header_footer;
mod numbering;
mod package;
mod paragraph;
mod props;
mod rels;
mod run;
mod styles;
mod table;

use crate::error::{Error, Result};
use crate::model::{DocumentTree, ListDefinition};
use crate::output::write_atomic;
use constants::{part, relationship_type as rt};
use header_footer::PagePart;
use package::{PackageWriter, content_types_for};
use rels::Relationships;
use std::path::Path;

/// Lookups shared by every part that serializes paragraphs.
pub(crate) struct PartContext<'a> {
    lists: &'a [ListDefinition],
}

impl<'a> PartContext<'a> {
    pub(crate) fn new(lists: &'a [ListDefinition]) -> Self {
        Self { lists }
    }

    /// Numbering ID of a list reference: its registration position + 1.
    pub(crate) fn num_id(&self, reference: &str) -> Result<usize> {
        self.lists
            .iter()
            .position(|list| list.reference == reference)
            .map(|index| index + 1)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("Unknown list reference: {}", reference))
            })
    }
}

/// Serializes document trees into `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Packager;

impl Packager {
    /// Package a tree into DOCX bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use specdoc::{Packager, Theme, build_document};
    ///
    /// # fn main() -> specdoc::Result<()> {
    /// let tree = build_document(&Theme::default())?;
    /// let bytes = Packager::to_bytes(&tree)?;
    /// assert_eq!(&bytes[..2], b"PK");
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_bytes(tree: &DocumentTree) -> Result<Vec<u8>> {
        let ctx = PartContext::new(tree.lists());
        let with_numbering = !tree.lists().is_empty();

        let mut package_rels = Relationships::new();
        package_rels.add(rt::OFFICE_DOCUMENT, part::DOCUMENT);
        package_rels.add(rt::CORE_PROPERTIES, part::CORE_PROPERTIES);
        package_rels.add(rt::EXTENDED_PROPERTIES, part::APP_PROPERTIES);

        // Targets are relative to word/
        let mut document_rels = Relationships::new();
        document_rels.add(rt::STYLES, "styles.xml");
        if with_numbering {
            document_rels.add(rt::NUMBERING, "numbering.xml");
        }
        if tree.header().is_some() {
            document_rels.add(rt::HEADER, "header1.xml");
        }
        if tree.footer().is_some() {
            document_rels.add(rt::FOOTER, "footer1.xml");
        }

        let document_xml = document::generate_document_xml(tree, &document_rels)?;
        let styles_xml = styles::generate_styles_xml(tree.styles())?;
        let core_xml = tree.properties().to_xml()?;
        let app_xml = props::generate_app_xml()?;

        let mut content_types = content_types_for(with_numbering);
        if tree.header().is_none() {
            content_types.remove_override(part::HEADER);
        }
        if tree.footer().is_none() {
            content_types.remove_override(part::FOOTER);
        }

        let mut writer = PackageWriter::new();
        writer.add_part(part::CONTENT_TYPES, content_types.to_xml().as_bytes())?;
        writer.add_part(part::PACKAGE_RELS, package_rels.to_xml().as_bytes())?;
        writer.add_part(part::CORE_PROPERTIES, core_xml.as_bytes())?;
        writer.add_part(part::APP_PROPERTIES, app_xml.as_bytes())?;
        writer.add_part(part::DOCUMENT, document_xml.as_bytes())?;
        writer.add_part(part::DOCUMENT_RELS, document_rels.to_xml().as_bytes())?;
        writer.add_part(part::STYLES, styles_xml.as_bytes())?;
        if with_numbering {
            let numbering_xml = numbering::generate_numbering_xml(tree.lists())?;
            writer.add_part(part::NUMBERING, numbering_xml.as_bytes())?;
        }
        if let Some(header) = tree.header() {
            let xml = header_footer::generate_page_part_xml(PagePart::Header, header, &ctx)?;
            writer.add_part(part::HEADER, xml.as_bytes())?;
        }
        if let Some(footer) = tree.footer() {
            let xml = header_footer::generate_page_part_xml(PagePart::Footer, footer, &ctx)?;
            writer.add_part(part::FOOTER, xml.as_bytes())?;
        }

        let bytes = writer.finish()?;
        log::debug!(
            "Packaged {} blocks, {} document relationships into {} bytes",
            tree.blocks().len(),
            document_rels.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Package a tree and write it atomically to `path`.
    pub fn save<P: AsRef<Path>>(tree: &DocumentTree, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(tree)?;
        write_atomic(path, &bytes)?;
        log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::Assembler;
    use crate::model::{ListFormat, StyleSheet};
    use crate::theme::Theme;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};

    fn small_tree(theme: &Theme, with_page_parts: bool) -> DocumentTree {
        let asm = Assembler::new(theme);
        let mut tree = DocumentTree::new(StyleSheet::from_theme(theme), theme.page.clone());
        tree.add_list(ListDefinition::new("bullet-list", ListFormat::Bullet, 720, 360))
            .unwrap();
        tree.push(asm.heading(1, "Overview").unwrap()).unwrap();
        tree.push(asm.list_item("bullet-list", "First & only")).unwrap();
        if with_page_parts {
            tree.set_header(asm.running_header("Header"));
            tree.set_footer(asm.page_number_footer());
        }
        tree
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed XML: {}", e),
            }
        }
    }

    #[test]
    fn test_num_id_lookup() {
        let lists = vec![
            ListDefinition::new("bullet-list", ListFormat::Bullet, 720, 360),
            ListDefinition::new("req-list", ListFormat::Decimal, 720, 360),
        ];
        let ctx = PartContext::new(&lists);
        assert_eq!(ctx.num_id("bullet-list").unwrap(), 1);
        assert_eq!(ctx.num_id("req-list").unwrap(), 2);
        assert!(matches!(ctx.num_id("nope"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_package_members() {
        let theme = Theme::default();
        let bytes = Packager::to_bytes(&small_tree(&theme, true)).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for member in [
            part::CONTENT_TYPES,
            part::PACKAGE_RELS,
            part::CORE_PROPERTIES,
            part::APP_PROPERTIES,
            part::DOCUMENT,
            part::DOCUMENT_RELS,
            part::STYLES,
            part::NUMBERING,
            part::HEADER,
            part::FOOTER,
        ] {
            assert!(names.contains(&member), "missing {}", member);
        }
    }

    #[test]
    fn test_parts_are_well_formed() {
        let theme = Theme::default();
        let bytes = Packager::to_bytes(&small_tree(&theme, true)).unwrap();
        for member in [
            part::CONTENT_TYPES,
            part::PACKAGE_RELS,
            part::DOCUMENT,
            part::DOCUMENT_RELS,
            part::STYLES,
            part::NUMBERING,
            part::HEADER,
            part::FOOTER,
            part::CORE_PROPERTIES,
            part::APP_PROPERTIES,
        ] {
            assert_well_formed(&read_member(&bytes, member));
        }
        assert!(read_member(&bytes, part::DOCUMENT).contains("First &amp; only"));
    }

    #[test]
    fn test_relationship_targets() {
        let theme = Theme::default();
        let bytes = Packager::to_bytes(&small_tree(&theme, true)).unwrap();
        let rels = read_member(&bytes, part::DOCUMENT_RELS);
        assert!(rels.contains(r#"Target="styles.xml""#));
        assert!(rels.contains(r#"Target="numbering.xml""#));
        assert!(rels.contains(r#"Target="header1.xml""#));
        assert!(rels.contains(r#"Target="footer1.xml""#));

        let document = read_member(&bytes, part::DOCUMENT);
        assert!(document.contains(r#"<w:headerReference w:type="default" r:id="rId3"/>"#));
        assert!(document.contains(r#"<w:footerReference w:type="default" r:id="rId4"/>"#));
    }

    #[test]
    fn test_without_header_and_footer() {
        let theme = Theme::default();
        let bytes = Packager::to_bytes(&small_tree(&theme, false)).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert!(!archive.file_names().any(|n| n == part::HEADER));
        let types = read_member(&bytes, part::CONTENT_TYPES);
        assert!(!types.contains("header1.xml"));
        assert!(!types.contains("footer1.xml"));
    }

    #[test]
    fn test_same_tree_same_bytes() {
        let theme = Theme::default();
        let tree = small_tree(&theme, true);
        assert_eq!(
            Packager::to_bytes(&tree).unwrap(),
            Packager::to_bytes(&tree).unwrap()
        );
    }

    #[test]
    fn test_save_writes_file() {
        let theme = Theme::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        Packager::save(&small_tree(&theme, true), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
