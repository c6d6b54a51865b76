/// Text runs: the smallest formatted unit of paragraph content.

/// What a run renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// Current page number field
    PageNumber,
    /// Total page count field
    PageCount,
}

/// A run of text sharing one set of character formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub content: RunContent,
    pub bold: bool,
    pub italic: bool,
    /// Font size in half-points; `None` inherits the document default
    pub size: Option<u32>,
    /// Text color in hex RGB
    pub color: Option<String>,
    /// Font family; `None` inherits the document default
    pub font: Option<String>,
}

impl TextRun {
    /// Create a plain text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_content(RunContent::Text(text.into()))
    }

    /// Create a run that renders the current page number.
    pub fn page_number() -> Self {
        Self::with_content(RunContent::PageNumber)
    }

    /// Create a run that renders the total page count.
    pub fn page_count() -> Self {
        Self::with_content(RunContent::PageCount)
    }

    fn with_content(content: RunContent) -> Self {
        Self {
            content,
            bold: false,
            italic: false,
            size: None,
            color: None,
            font: None,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set text color using hex RGB (e.g., "1a365d").
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Text of the run, empty for field runs.
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(text) => text,
            _ => "",
        }
    }

    pub(crate) fn has_properties(&self) -> bool {
        self.bold
            || self.italic
            || self.size.is_some()
            || self.color.is_some()
            || self.font.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run_has_no_properties() {
        let run = TextRun::new("plain");
        assert_eq!(run.text(), "plain");
        assert!(!run.has_properties());
    }

    #[test]
    fn test_chained_formatting() {
        let run = TextRun::new("Field").bold(true).size(22).color("FFFFFF");
        assert!(run.bold);
        assert_eq!(run.size, Some(22));
        assert_eq!(run.color.as_deref(), Some("FFFFFF"));
        assert!(run.has_properties());
    }

    #[test]
    fn test_field_runs_have_no_text() {
        assert_eq!(TextRun::page_number().text(), "");
        assert_eq!(TextRun::page_count().content, RunContent::PageCount);
    }
}
