/// Root aggregate handed to the packager.
use super::block::ContentBlock;
use super::numbering::ListDefinition;
use super::paragraph::Paragraph;
use super::section::PageSetup;
use crate::error::{Error, Result};
use crate::theme::{HeadingStyle, Theme};
use chrono::{DateTime, Utc};

/// Document-wide run defaults and heading paragraph styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub body_font: String,
    /// Body size in half-points
    pub body_size: u32,
    /// Heading styles indexed by level - 1
    pub headings: Vec<HeadingStyle>,
}

impl StyleSheet {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            body_font: theme.body_font.clone(),
            body_size: theme.body_size,
            headings: vec![
                theme.heading1.clone(),
                theme.heading2.clone(),
                theme.heading3.clone(),
            ],
        }
    }
}

/// Core properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentProperties {
    pub title: String,
    pub subject: String,
    pub creator: String,
    pub keywords: String,
    /// Creation time, also written as the modification time
    pub created: Option<DateTime<Utc>>,
    pub revision: u32,
}

/// Ordered content blocks plus page-level configuration.
///
/// The tree owns its blocks exclusively. Every list item must reference a
/// list definition registered before the item is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTree {
    blocks: Vec<ContentBlock>,
    page: PageSetup,
    header: Option<Paragraph>,
    footer: Option<Paragraph>,
    lists: Vec<ListDefinition>,
    styles: StyleSheet,
    properties: DocumentProperties,
}

impl DocumentTree {
    pub fn new(styles: StyleSheet, page: PageSetup) -> Self {
        Self {
            blocks: Vec::new(),
            page,
            header: None,
            footer: None,
            lists: Vec::new(),
            styles,
            properties: DocumentProperties::default(),
        }
    }

    /// Register a list definition. References must be unique.
    pub fn add_list(&mut self, list: ListDefinition) -> Result<()> {
        if self.list_index(&list.reference).is_some() {
            return Err(Error::InvalidArgument(format!(
                "Duplicate list reference: {}",
                list.reference
            )));
        }
        self.lists.push(list);
        Ok(())
    }

    /// Append a block, checking list references.
    pub fn push(&mut self, block: ContentBlock) -> Result<()> {
        if let Some(numbering) = block.paragraph().and_then(|p| p.numbering.as_ref())
            && self.list_index(&numbering.reference).is_none()
        {
            return Err(Error::InvalidArgument(format!(
                "Unknown list reference: {}",
                numbering.reference
            )));
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Append several blocks in order.
    pub fn extend<I: IntoIterator<Item = ContentBlock>>(&mut self, blocks: I) -> Result<()> {
        blocks.into_iter().try_for_each(|block| self.push(block))
    }

    pub fn set_header(&mut self, header: Paragraph) {
        self.header = Some(header);
    }

    pub fn set_footer(&mut self, footer: Paragraph) {
        self.footer = Some(footer);
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn page(&self) -> &PageSetup {
        &self.page
    }

    pub fn header(&self) -> Option<&Paragraph> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Paragraph> {
        self.footer.as_ref()
    }

    pub fn lists(&self) -> &[ListDefinition] {
        &self.lists
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Position of a list definition; numbering IDs are derived from it.
    pub fn list_index(&self, reference: &str) -> Option<usize> {
        self.lists.iter().position(|l| l.reference == reference)
    }

    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_heading()).count()
    }

    pub fn table_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::Table(_)))
            .count()
    }

    pub fn page_break_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::PageBreak))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListFormat, NumberingRef, TextRun};

    fn tree() -> DocumentTree {
        DocumentTree::new(StyleSheet::from_theme(&Theme::default()), PageSetup::default())
    }

    #[test]
    fn test_empty_tree() {
        let tree = tree();
        assert!(tree.blocks().is_empty());
        assert!(tree.header().is_none());
        assert_eq!(tree.styles().headings.len(), 3);
    }

    #[test]
    fn test_list_item_requires_definition() {
        let mut tree = tree();
        let item = Paragraph::new()
            .numbering(NumberingRef::new("bullet-list"))
            .add_run(TextRun::new("item"));
        assert!(matches!(
            tree.push(ContentBlock::Paragraph(item.clone())),
            Err(Error::InvalidArgument(_))
        ));

        tree.add_list(ListDefinition::new("bullet-list", ListFormat::Bullet, 720, 360))
            .unwrap();
        tree.push(ContentBlock::Paragraph(item)).unwrap();
        assert_eq!(tree.blocks().len(), 1);
    }

    #[test]
    fn test_duplicate_list_reference() {
        let mut tree = tree();
        tree.add_list(ListDefinition::new("steps", ListFormat::Decimal, 720, 360))
            .unwrap();
        let dup = tree.add_list(ListDefinition::new("steps", ListFormat::Bullet, 720, 360));
        assert!(dup.is_err());
        assert_eq!(tree.list_index("steps"), Some(0));
    }

    #[test]
    fn test_counts() {
        let mut tree = tree();
        tree.extend([
            ContentBlock::Heading {
                level: 1,
                paragraph: Paragraph::new(),
            },
            ContentBlock::PageBreak,
            ContentBlock::Paragraph(Paragraph::new()),
        ])
        .unwrap();
        assert_eq!(tree.heading_count(), 1);
        assert_eq!(tree.page_break_count(), 1);
        assert_eq!(tree.table_count(), 0);
    }
}
