//! ZIP packaging of the generated parts.
//!
//! Members are written in a fixed order with a fixed timestamp, so the same
//! document tree always produces the same archive bytes.

use super::constants::{content_type as ct, part};
use crate::error::Result;
use crate::xml::{XML_DECLARATION, escape_xml};
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// `[Content_Types].xml` builder: defaults by extension, overrides by part.
#[derive(Debug)]
pub(crate) struct ContentTypes {
    defaults: BTreeMap<&'static str, &'static str>,
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypes {
    pub(crate) fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels", ct::OPC_RELATIONSHIPS);
        defaults.insert("xml", ct::XML);
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register an override for an archive member name (no leading slash).
    pub(crate) fn add_override(&mut self, member: &str, content_type: &'static str) {
        self.overrides.insert(format!("/{}", member), content_type);
    }

    pub(crate) fn remove_override(&mut self, member: &str) {
        self.overrides.remove(&format!("/{}", member));
    }

    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// In-memory ZIP archive of package parts.
pub(crate) struct PackageWriter {
    zip_writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl PackageWriter {
    pub(crate) fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Add one deflated member.
    pub(crate) fn add_part(&mut self, name: &str, content: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.zip_writer.start_file(name, options)?;
        self.zip_writer.write_all(content)?;
        log::debug!("Packaged {} ({} bytes)", name, content.len());
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub(crate) fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Content types for the fixed part set; numbering only when lists exist.
pub(crate) fn content_types_for(with_numbering: bool) -> ContentTypes {
    let mut types = ContentTypes::new();
    types.add_override(part::DOCUMENT, ct::WML_DOCUMENT_MAIN);
    types.add_override(part::STYLES, ct::WML_STYLES);
    if with_numbering {
        types.add_override(part::NUMBERING, ct::WML_NUMBERING);
    }
    types.add_override(part::HEADER, ct::WML_HEADER);
    types.add_override(part::FOOTER, ct::WML_FOOTER);
    types.add_override(part::CORE_PROPERTIES, ct::OPC_CORE_PROPERTIES);
    types.add_override(part::APP_PROPERTIES, ct::OFC_EXTENDED_PROPERTIES);
    types
}
