/// Paragraph serialization (`<w:p>`).
use super::PartContext;
use crate::error::Result;
use crate::model::Paragraph;
use crate::xml::escape_xml;
use std::fmt::Write as FmtWrite;

impl Paragraph {
    pub(crate) fn to_xml(&self, xml: &mut String, ctx: &PartContext<'_>) -> Result<()> {
        xml.push_str("<w:p>");

        // Child order of pPr is fixed by the schema
        if self.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style_id {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            if let Some(ref numbering) = self.numbering {
                let num_id = ctx.num_id(&numbering.reference)?;
                write!(
                    xml,
                    "<w:numPr><w:ilvl w:val=\"{}\"/><w:numId w:val=\"{}\"/></w:numPr>",
                    numbering.level, num_id
                )?;
            }

            if let Some(ref fill) = self.shading {
                write!(
                    xml,
                    "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                    escape_xml(fill)
                )?;
            }

            if self.space_before.is_some() || self.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    write!(xml, " w:before=\"{}\"", before)?;
                }
                if let Some(after) = self.space_after {
                    write!(xml, " w:after=\"{}\"", after)?;
                }
                xml.push_str("/>");
            }

            if let Some(left) = self.indent_left {
                write!(xml, "<w:ind w:left=\"{}\"/>", left)?;
            }

            if let Some(alignment) = self.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph holding a single page break run.
pub(crate) fn write_page_break(xml: &mut String) {
    xml.push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>");
}
