/// Main document part (`word/document.xml`).
use super::PartContext;
use super::paragraph::write_page_break;
use super::rels::Relationships;
use crate::error::Result;
use crate::model::{ContentBlock, DocumentTree, PageSetup};
use crate::writer::constants::relationship_type as rt;
use crate::xml::{NS_R, NS_W, XML_DECLARATION};
use std::fmt::Write as FmtWrite;

/// Generate the body XML with section properties referencing the header and
/// footer relationships in `rels`.
pub(crate) fn generate_document_xml(tree: &DocumentTree, rels: &Relationships) -> Result<String> {
    let ctx = PartContext::new(tree.lists());
    let mut xml = String::with_capacity(64 * 1024);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<w:document xmlns:w="{}" xmlns:r="{}">"#, NS_W, NS_R)?;
    xml.push_str("<w:body>");

    for block in tree.blocks() {
        match block {
            ContentBlock::Heading { paragraph, .. }
            | ContentBlock::Paragraph(paragraph)
            | ContentBlock::CodeLine(paragraph) => paragraph.to_xml(&mut xml, &ctx)?,
            ContentBlock::Table(table) => table.to_xml(&mut xml)?,
            ContentBlock::PageBreak => write_page_break(&mut xml),
        }
    }

    // The sectPr must be the last element in the body
    write_section_properties(&mut xml, tree.page(), rels)?;

    xml.push_str("</w:body></w:document>");
    Ok(xml)
}

fn write_section_properties(
    xml: &mut String,
    page: &PageSetup,
    rels: &Relationships,
) -> Result<()> {
    xml.push_str("<w:sectPr>");

    if let Some(header_id) = rels.id_of(rt::HEADER) {
        write!(xml, r#"<w:headerReference w:type="default" r:id="{}"/>"#, header_id)?;
    }
    if let Some(footer_id) = rels.id_of(rt::FOOTER) {
        write!(xml, r#"<w:footerReference w:type="default" r:id="{}"/>"#, footer_id)?;
    }

    let (width, height) = page.dimensions();
    write!(
        xml,
        r#"<w:pgSz w:w="{}" w:h="{}" w:orient="{}"/>"#,
        width,
        height,
        page.orientation.as_str()
    )?;
    write!(
        xml,
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
        page.margin_top,
        page.margin_right,
        page.margin_bottom,
        page.margin_left,
        page.header_distance,
        page.footer_distance
    )?;

    xml.push_str("</w:sectPr>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::Assembler;
    use crate::model::StyleSheet;
    use crate::theme::Theme;

    fn sample_tree(theme: &Theme) -> DocumentTree {
        let asm = Assembler::new(theme);
        let mut tree = DocumentTree::new(StyleSheet::from_theme(theme), theme.page.clone());
        tree.push(asm.heading(1, "1. Document Control").unwrap()).unwrap();
        tree.push(asm.para("Body & text")).unwrap();
        tree.push(asm.page_break()).unwrap();
        tree.push(asm.code_line("mcp>=1.0.0")).unwrap();
        tree
    }

    #[test]
    fn test_body_order_and_section() {
        let theme = Theme::default();
        let tree = sample_tree(&theme);
        let mut rels = Relationships::new();
        rels.add(rt::STYLES, "styles.xml");
        rels.add(rt::HEADER, "header1.xml");
        rels.add(rt::FOOTER, "footer1.xml");

        let xml = generate_document_xml(&tree, &rels).unwrap();
        let heading = xml.find("1. Document Control").unwrap();
        let body = xml.find("Body &amp; text").unwrap();
        let page_break = xml.find("w:type=\"page\"").unwrap();
        let code = xml.find("mcp&gt;=1.0.0").unwrap();
        let sect = xml.find("<w:sectPr>").unwrap();
        assert!(heading < body && body < page_break && page_break < code && code < sect);

        assert!(xml.contains(r#"<w:headerReference w:type="default" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<w:footerReference w:type="default" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840" w:orient="portrait"/>"#));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_no_header_reference_without_relationship() {
        let theme = Theme::default();
        let tree = sample_tree(&theme);
        let xml = generate_document_xml(&tree, &Relationships::new()).unwrap();
        assert!(!xml.contains("headerReference"));
        assert!(!xml.contains("footerReference"));
    }

    #[test]
    fn test_landscape_override_swaps_page_size() {
        let theme = Theme::from_yaml_str("page:\n  orientation: landscape\n").unwrap();
        let tree = sample_tree(&theme);
        let xml = generate_document_xml(&tree, &Relationships::new()).unwrap();
        assert!(xml.contains(r#"<w:pgSz w:w="15840" w:h="12240" w:orient="landscape"/>"#));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let theme = Theme::default();
        let asm = Assembler::new(&theme);
        let mut tree = DocumentTree::new(StyleSheet::from_theme(&theme), theme.page.clone());
        tree.push(asm.para("bell\u{7} and\ttab")).unwrap();
        let xml = generate_document_xml(&tree, &Relationships::new()).unwrap();
        assert!(!xml.contains('\u{7}'));
        assert!(xml.contains("bell and\ttab"));
    }
}
