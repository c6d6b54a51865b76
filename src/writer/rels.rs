/// Relationship bookkeeping for the package and the main document part.
///
/// IDs are assigned in insertion order (`rId1`, `rId2`, ...) so the same set of
/// parts always yields the same IDs.
use crate::xml::{XML_DECLARATION, escape_xml};

/// A single internal relationship.
#[derive(Debug, Clone)]
pub(crate) struct Relationship {
    pub(crate) r_id: String,
    pub(crate) reltype: &'static str,
    pub(crate) target: String,
}

/// Ordered relationship collection for one source part.
#[derive(Debug, Default)]
pub(crate) struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID.
    pub(crate) fn add(&mut self, reltype: &'static str, target: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target: target.to_string(),
        });
        r_id
    }

    /// Look up the ID of the first relationship of a type.
    pub(crate) fn id_of(&self, reltype: &str) -> Option<&str> {
        self.rels
            .iter()
            .find(|rel| rel.reltype == reltype)
            .map(|rel| rel.r_id.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.rels.len()
    }

    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(rel.reltype),
                escape_xml(&rel.target)
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}
