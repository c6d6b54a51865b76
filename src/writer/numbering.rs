/// Numbering part (`word/numbering.xml`).
///
/// Each list definition gets its own abstract numbering and concrete `w:num`,
/// both with ID `index + 1`. All `w:abstractNum` elements must precede the
/// `w:num` elements.
use crate::error::Result;
use crate::model::ListDefinition;
use crate::xml::{NS_W, XML_DECLARATION, escape_xml};
use std::fmt::Write as FmtWrite;

pub(crate) fn generate_numbering_xml(lists: &[ListDefinition]) -> Result<String> {
    let mut xml = String::with_capacity(512 + lists.len() * 512);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<w:numbering xmlns:w="{}">"#, NS_W)?;

    for (index, list) in lists.iter().enumerate() {
        write_abstract_num(&mut xml, index + 1, list)?;
    }
    for id in 1..=lists.len() {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            id, id
        )?;
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}

fn write_abstract_num(xml: &mut String, id: usize, list: &ListDefinition) -> Result<()> {
    write!(xml, r#"<w:abstractNum w:abstractNumId="{}">"#, id)?;
    xml.push_str(r#"<w:multiLevelType w:val="singleLevel"/>"#);
    xml.push_str(r#"<w:lvl w:ilvl="0">"#);
    xml.push_str(r#"<w:start w:val="1"/>"#);
    write!(xml, r#"<w:numFmt w:val="{}"/>"#, list.format.as_str())?;
    write!(xml, r#"<w:lvlText w:val="{}"/>"#, escape_xml(&list.text))?;
    xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
    write!(
        xml,
        r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
        list.indent_left, list.hanging
    )?;
    xml.push_str("</w:lvl></w:abstractNum>");
    Ok(())
}
