/// Run serialization (`<w:r>`), including page number fields.
use crate::error::Result;
use crate::model::{RunContent, TextRun};
use crate::xml::escape_xml;
use std::fmt::Write as FmtWrite;

impl TextRun {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.content {
            RunContent::Text(text) => {
                xml.push_str("<w:r>");
                self.write_properties(xml)?;
                if !text.is_empty() {
                    write!(xml, "<w:t xml:space=\"preserve\">{}</w:t>", escape_xml(text))?;
                }
                xml.push_str("</w:r>");
            },
            RunContent::PageNumber => self.write_field(xml, "PAGE")?,
            RunContent::PageCount => self.write_field(xml, "NUMPAGES")?,
        }
        Ok(())
    }

    /// Complex field: begin, instruction, separate, cached result, end.
    /// Every run of the field carries the same formatting.
    fn write_field(&self, xml: &mut String, instruction: &str) -> Result<()> {
        xml.push_str("<w:r>");
        self.write_properties(xml)?;
        xml.push_str("<w:fldChar w:fldCharType=\"begin\"/></w:r><w:r>");
        self.write_properties(xml)?;
        write!(
            xml,
            "<w:instrText xml:space=\"preserve\"> {} </w:instrText></w:r><w:r>",
            instruction
        )?;
        self.write_properties(xml)?;
        xml.push_str("<w:fldChar w:fldCharType=\"separate\"/></w:r><w:r>");
        self.write_properties(xml)?;
        xml.push_str("<w:t>1</w:t></w:r><w:r>");
        self.write_properties(xml)?;
        xml.push_str("<w:fldChar w:fldCharType=\"end\"/></w:r>");
        Ok(())
    }

    fn write_properties(&self, xml: &mut String) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }
        xml.push_str("<w:rPr>");
        if let Some(ref font) = self.font {
            let font = escape_xml(font);
            write!(
                xml,
                "<w:rFonts w:ascii=\"{}\" w:hAnsi=\"{}\" w:cs=\"{}\"/>",
                font, font, font
            )?;
        }
        if self.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if self.italic {
            xml.push_str("<w:i/><w:iCs/>");
        }
        if let Some(ref color) = self.color {
            write!(xml, "<w:color w:val=\"{}\"/>", escape_xml(color))?;
        }
        if let Some(size) = self.size {
            write!(xml, "<w:sz w:val=\"{}\"/><w:szCs w:val=\"{}\"/>", size, size)?;
        }
        xml.push_str("</w:rPr>");
        Ok(())
    }
}
