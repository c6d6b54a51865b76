use super::paragraph::Paragraph;
use super::table::Table;

/// One discrete unit of body content, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Section heading, level 1 to 3
    Heading { level: u8, paragraph: Paragraph },
    /// Prose, labeled lines, list items, title lines and spacers
    Paragraph(Paragraph),
    Table(Table),
    /// One monospaced line of a code listing
    CodeLine(Paragraph),
    PageBreak,
}

impl ContentBlock {
    /// Paragraph carried by the block, if it renders as a single paragraph.
    pub fn paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Heading { paragraph, .. }
            | Self::Paragraph(paragraph)
            | Self::CodeLine(paragraph) => Some(paragraph),
            Self::Table(_) | Self::PageBreak => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }
}
