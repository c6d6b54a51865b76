/// List (numbering) definitions.
///
/// Every definition is addressed by a string reference such as
/// `"bullet-list"` or `"install-list"`. Paragraphs sharing a reference form one
/// continuous sequence; a new reference restarts numbering at 1.

/// Marker format of a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Bullet,
    Decimal,
}

impl ListFormat {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Decimal => "decimal",
        }
    }

    /// Default level text for the format.
    pub fn level_text(&self) -> &'static str {
        match self {
            Self::Bullet => "\u{2022}",
            Self::Decimal => "%1.",
        }
    }
}

/// A single-level list definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDefinition {
    pub reference: String,
    pub format: ListFormat,
    /// Marker text, `%1` is replaced by the item number
    pub text: String,
    /// Left indentation in twips
    pub indent_left: u32,
    /// Hanging indentation in twips
    pub hanging: u32,
}

impl ListDefinition {
    pub fn new(
        reference: impl Into<String>,
        format: ListFormat,
        indent_left: u32,
        hanging: u32,
    ) -> Self {
        Self {
            reference: reference.into(),
            format,
            text: format.level_text().to_string(),
            indent_left,
            hanging,
        }
    }
}

/// Reference from a paragraph to a list definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingRef {
    pub reference: String,
    pub level: u32,
}

impl NumberingRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            level: 0,
        }
    }
}
