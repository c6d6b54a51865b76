/// Core (`docProps/core.xml`) and extended (`docProps/app.xml`) properties.
use crate::error::Result;
use crate::model::DocumentProperties;
use crate::xml::{XML_DECLARATION, escape_xml};
use chrono::SecondsFormat;
use std::fmt::Write as FmtWrite;

/// Application name recorded in the extended properties.
const APPLICATION: &str = "specdoc";

fn write_element(xml: &mut String, tag: &str, value: &str) -> Result<()> {
    if !value.is_empty() {
        write!(xml, "<{}>{}</{}>", tag, escape_xml(value), tag)?;
    }
    Ok(())
}

impl DocumentProperties {
    /// Serialize as an OPC core properties part.
    ///
    /// `created` doubles as the modification date so repeated runs produce
    /// identical bytes.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(XML_DECLARATION);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        write_element(&mut xml, "dc:title", &self.title)?;
        write_element(&mut xml, "dc:subject", &self.subject)?;
        write_element(&mut xml, "dc:creator", &self.creator)?;
        write_element(&mut xml, "cp:keywords", &self.keywords)?;
        if self.revision > 0 {
            write!(xml, "<cp:revision>{}</cp:revision>", self.revision)?;
        }

        if let Some(created) = self.created {
            let created = created.to_rfc3339_opts(SecondsFormat::Secs, true);
            write!(
                xml,
                r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
                created
            )?;
            write!(
                xml,
                r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
                created
            )?;
        }

        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }
}

/// Serialize the extended properties part.
pub(crate) fn generate_app_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    xml.push_str("</Properties>");
    Ok(xml)
}
