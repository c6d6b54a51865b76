/// Running header and footer parts.
use super::PartContext;
use crate::error::Result;
use crate::model::Paragraph;
use crate::xml::{NS_R, NS_W, XML_DECLARATION};
use std::fmt::Write as FmtWrite;

/// Which kind of running part to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PagePart {
    Header,
    Footer,
}

impl PagePart {
    fn root(&self) -> &'static str {
        match self {
            Self::Header => "w:hdr",
            Self::Footer => "w:ftr",
        }
    }
}

/// Generate a header or footer part holding a single paragraph.
pub(crate) fn generate_page_part_xml(
    kind: PagePart,
    paragraph: &Paragraph,
    ctx: &PartContext<'_>,
) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<{} xmlns:w="{}" xmlns:r="{}">"#, kind.root(), NS_W, NS_R)?;
    paragraph.to_xml(&mut xml, ctx)?;
    write!(xml, "</{}>", kind.root())?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::Assembler;
    use crate::theme::Theme;

    #[test]
    fn test_header_part() {
        let theme = Theme::default();
        let asm = Assembler::new(&theme);
        let header = asm.running_header("Technical Specification");
        let xml = generate_page_part_xml(PagePart::Header, &header, &PartContext::new(&[])).unwrap();
        assert!(xml.contains("<w:hdr "));
        assert!(xml.contains(r#"<w:jc w:val="right"/>"#));
        assert!(xml.contains("<w:i/>"));
        assert!(xml.ends_with("</w:hdr>"));
    }

    #[test]
    fn test_footer_part() {
        let theme = Theme::default();
        let asm = Assembler::new(&theme);
        let footer = asm.page_number_footer();
        let xml = generate_page_part_xml(PagePart::Footer, &footer, &PartContext::new(&[])).unwrap();
        assert!(xml.contains("<w:ftr "));
        assert!(xml.contains(" PAGE "));
        assert!(xml.contains(" NUMPAGES "));
        assert!(xml.ends_with("</w:ftr>"));
    }
}
