/// Styles part (`word/styles.xml`): document defaults plus the paragraph
/// styles referenced from the body.
use crate::error::Result;
use crate::model::StyleSheet;
use crate::theme::HeadingStyle;
use crate::xml::{NS_R, NS_W, XML_DECLARATION, escape_xml};
use std::fmt::Write as FmtWrite;

pub(crate) fn generate_styles_xml(styles: &StyleSheet) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#, NS_W, NS_R)?;

    let font = escape_xml(&styles.body_font);
    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    write!(
        xml,
        r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
        font, font, font
    )?;
    write!(
        xml,
        r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#,
        styles.body_size, styles.body_size
    )?;
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
    xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/>"#);
    xml.push_str("</w:style>");

    for (index, heading) in styles.headings.iter().enumerate() {
        write_heading_style(&mut xml, index + 1, heading)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}

fn write_heading_style(xml: &mut String, level: usize, style: &HeadingStyle) -> Result<()> {
    write!(
        xml,
        r#"<w:style w:type="paragraph" w:styleId="Heading{}">"#,
        level
    )?;
    write!(xml, r#"<w:name w:val="heading {}"/>"#, level)?;
    xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#);

    xml.push_str("<w:pPr>");
    write!(
        xml,
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        style.space_before, style.space_after
    )?;
    write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level - 1)?;
    xml.push_str("</w:pPr>");

    xml.push_str("<w:rPr>");
    if style.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    write!(xml, r#"<w:color w:val="{}"/>"#, escape_xml(&style.color))?;
    write!(
        xml,
        r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#,
        style.size, style.size
    )?;
    xml.push_str("</w:rPr>");

    xml.push_str("</w:style>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_defaults_from_theme() {
        let xml = generate_styles_xml(&StyleSheet::from_theme(&Theme::default())).unwrap();
        assert!(xml.contains(r#"<w:rFonts w:ascii="Arial" w:hAnsi="Arial" w:cs="Arial"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#));
        assert!(xml.contains(r#"w:default="1" w:styleId="Normal""#));
    }

    #[test]
    fn test_heading_styles() {
        let xml = generate_styles_xml(&StyleSheet::from_theme(&Theme::default())).unwrap();
        for level in 1..=3 {
            assert!(xml.contains(&format!(r#"w:styleId="Heading{}""#, level)));
            assert!(xml.contains(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level - 1)));
        }
        assert!(xml.contains(r#"<w:spacing w:before="400" w:after="200"/>"#));
        assert!(xml.contains(r#"<w:color w:val="2d3748"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.ends_with("</w:styles>"));
    }
}
