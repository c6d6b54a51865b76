/// Paragraph model and paragraph-level formatting.
use super::numbering::NumberingRef;
use super::run::TextRun;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    Right,
}

impl Alignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// A paragraph: ordered runs plus paragraph properties.
///
/// Spacing and indentation are in twips. Unset properties are omitted from
/// the output and fall back to the style defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// Paragraph style ID (e.g., "Heading1")
    pub style_id: Option<String>,
    pub alignment: Option<Alignment>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    pub indent_left: Option<u32>,
    /// Background fill in hex RGB
    pub shading: Option<String>,
    /// List membership
    pub numbering: Option<NumberingRef>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(mut self, twips: u32) -> Self {
        self.space_before = Some(twips);
        self
    }

    pub fn space_after(mut self, twips: u32) -> Self {
        self.space_after = Some(twips);
        self
    }

    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left = Some(twips);
        self
    }

    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn numbering(mut self, numbering: NumberingRef) -> Self {
        self.numbering = Some(numbering);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(TextRun::text).collect()
    }

    pub(crate) fn has_properties(&self) -> bool {
        self.style_id.is_some()
            || self.alignment.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.indent_left.is_some()
            || self.shading.is_some()
            || self.numbering.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_runs() {
        let para = Paragraph::new()
            .add_run(TextRun::new("Returns: ").bold(true))
            .add_run(TextRun::new("{ total }"));
        assert_eq!(para.text(), "Returns: { total }");
        assert!(!para.has_properties());
    }

    #[test]
    fn test_alignment_values() {
        assert_eq!(Alignment::Center.as_str(), "center");
        assert_eq!(Alignment::Right.as_str(), "right");
    }
}
