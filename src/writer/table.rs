/// Table serialization (`<w:tbl>`).
use crate::error::Result;
use crate::model::{Border, Table, TableRow};
use crate::xml::escape_xml;
use std::fmt::Write as FmtWrite;

fn write_border(xml: &mut String, name: &str, border: &Border) -> Result<()> {
    write!(
        xml,
        "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
        name,
        border.style.as_str(),
        border.size,
        escape_xml(&border.color)
    )?;
    Ok(())
}

impl Table {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>", self.width())?;
        xml.push_str("<w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            write_border(xml, side, &self.look().border)?;
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("<w:tblLayout w:type=\"fixed\"/>");
        xml.push_str("</w:tblPr>");

        xml.push_str("<w:tblGrid>");
        for width in self.column_widths() {
            write!(xml, "<w:gridCol w:w=\"{}\"/>", width)?;
        }
        xml.push_str("</w:tblGrid>");

        for row in self.rows() {
            self.write_row(xml, row)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    fn write_row(&self, xml: &mut String, row: &TableRow) -> Result<()> {
        let look = self.look();
        xml.push_str("<w:tr>");
        if row.header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }

        let fill = if row.header {
            Some(look.header_fill.as_str())
        } else if row.alternate {
            Some(look.alternate_fill.as_str())
        } else {
            None
        };

        for (text, width) in row.cells.iter().zip(self.column_widths()) {
            xml.push_str("<w:tc><w:tcPr>");
            write!(xml, "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", width)?;
            if let Some(fill) = fill {
                write!(
                    xml,
                    "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                    escape_xml(fill)
                )?;
            }
            xml.push_str("</w:tcPr>");

            xml.push_str("<w:p>");
            if row.header {
                xml.push_str("<w:pPr><w:jc w:val=\"left\"/></w:pPr>");
            }
            xml.push_str("<w:r><w:rPr>");
            if row.header {
                write!(
                    xml,
                    "<w:b/><w:bCs/><w:color w:val=\"{}\"/>",
                    escape_xml(&look.header_text_color)
                )?;
            }
            write!(
                xml,
                "<w:sz w:val=\"{}\"/><w:szCs w:val=\"{}\"/></w:rPr>",
                look.text_size, look.text_size
            )?;
            if !text.is_empty() {
                write!(xml, "<w:t xml:space=\"preserve\">{}</w:t>", escape_xml(text))?;
            }
            xml.push_str("</w:r></w:p></w:tc>");
        }

        xml.push_str("</w:tr>");
        Ok(())
    }
}
