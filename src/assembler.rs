//! Constructor functions for styled content blocks.
//!
//! An [`Assembler`] borrows a [`Theme`] and turns literal text into
//! [`ContentBlock`]s and [`TableRow`]s. Every style value comes from the
//! theme, so the output is a pure function of the theme and the arguments.
//!
//! # Examples
//!
//! ```
//! use specdoc::{Assembler, Theme};
//!
//! # fn main() -> specdoc::Result<()> {
//! let theme = Theme::default();
//! let asm = Assembler::new(&theme);
//!
//! let heading = asm.heading(1, "1. Document Control")?;
//! let table = asm.table(
//!     &[3000, 6360],
//!     vec![
//!         asm.table_header_row(&["Field", "Value"]),
//!         asm.table_row(&["Document ID", "SPEC-HCP-MCP-001"], false),
//!     ],
//! )?;
//! assert!(heading.is_heading());
//! # let _ = table;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::model::{
    Alignment, Border, ContentBlock, NumberingRef, Paragraph, Table, TableLook, TableRow,
    TextRun,
};
use crate::theme::Theme;

/// Optional overrides for [`Assembler::paragraph`].
///
/// Unset fields take the theme defaults: spacing after from
/// `paragraph_space_after`, no shading and no indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphOptions {
    /// Spacing before and after in twips
    pub spacing: Option<(u32, u32)>,
    /// Background fill in hex RGB
    pub shading: Option<String>,
    /// Left indentation in twips
    pub indent: Option<u32>,
}

impl ParagraphOptions {
    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing = Some((before, after));
        self
    }

    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn indent(mut self, twips: u32) -> Self {
        self.indent = Some(twips);
        self
    }
}

/// Run attributes for a centered title-page line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleStyle {
    /// Size in half-points
    pub size: u32,
    pub bold: bool,
    /// Text color; `None` uses the body color
    pub color: Option<String>,
}

/// Builds styled blocks from literal text using one theme.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    theme: &'a Theme,
}

impl<'a> Assembler<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Heading block for level 1, 2 or 3.
    ///
    /// Size, color and spacing are looked up from the theme by level. Any
    /// other level fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument).
    pub fn heading(&self, level: u8, text: &str) -> Result<ContentBlock> {
        let style = self.theme.heading_style(level)?;
        let run = TextRun::new(text)
            .bold(style.bold)
            .size(style.size)
            .color(style.color.as_str());
        let paragraph = Paragraph::new()
            .style(format!("Heading{}", level))
            .space_before(style.space_before)
            .space_after(style.space_after)
            .add_run(run);
        Ok(ContentBlock::Heading { level, paragraph })
    }

    /// Plain prose paragraph.
    pub fn paragraph(&self, text: &str, options: &ParagraphOptions) -> ContentBlock {
        let run = TextRun::new(text).size(self.theme.body_size);
        let mut paragraph = Paragraph::new().add_run(run);
        match options.spacing {
            Some((before, after)) => {
                if before > 0 {
                    paragraph = paragraph.space_before(before);
                }
                paragraph = paragraph.space_after(after);
            },
            None => paragraph = paragraph.space_after(self.theme.paragraph_space_after),
        }
        if let Some(ref fill) = options.shading {
            paragraph = paragraph.shading(fill.as_str());
        }
        if let Some(indent) = options.indent {
            paragraph = paragraph.indent_left(indent);
        }
        ContentBlock::Paragraph(paragraph)
    }

    /// Plain paragraph with theme defaults.
    pub fn para(&self, text: &str) -> ContentBlock {
        self.paragraph(text, &ParagraphOptions::default())
    }

    /// "Label: value" line with a bold label run and a plain value run.
    pub fn labeled_paragraph(&self, label: &str, value: &str) -> ContentBlock {
        let size = self.theme.body_size;
        ContentBlock::Paragraph(
            Paragraph::new()
                .space_after(self.theme.labeled_space_after)
                .add_run(TextRun::new(label).bold(true).size(size))
                .add_run(TextRun::new(value).size(size)),
        )
    }

    /// One line of a code listing: monospaced, shaded and indented.
    pub fn code_line(&self, text: &str) -> ContentBlock {
        let code = &self.theme.code;
        ContentBlock::CodeLine(
            Paragraph::new()
                .space_before(code.space_before)
                .space_after(code.space_after)
                .shading(code.shading.as_str())
                .indent_left(code.indent_left)
                .add_run(TextRun::new(text).font(code.font.as_str()).size(code.size)),
        )
    }

    /// Header row; cells keep their order.
    pub fn table_header_row<S: AsRef<str>>(&self, cells: &[S]) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.as_ref().to_string()).collect(),
            header: true,
            alternate: false,
        }
    }

    /// Data row; cells keep their order.
    pub fn table_row<S: AsRef<str>>(&self, cells: &[S], alternate_shading: bool) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.as_ref().to_string()).collect(),
            header: false,
            alternate: alternate_shading,
        }
    }

    /// Table block with the theme's borders and fills.
    ///
    /// Fails with [`Error::ColumnMismatch`](crate::Error::ColumnMismatch)
    /// when a row's cell count differs from `column_widths.len()`.
    pub fn table(&self, column_widths: &[u32], rows: Vec<TableRow>) -> Result<ContentBlock> {
        let style = &self.theme.table;
        let look = TableLook {
            border: Border {
                style: style.border_style,
                size: style.border_size,
                color: style.border_color.clone(),
            },
            header_fill: style.header_fill.clone(),
            header_text_color: style.header_text_color.clone(),
            alternate_fill: style.alternate_fill.clone(),
            text_size: style.text_size,
        };
        Table::new(column_widths.to_vec(), rows, look).map(ContentBlock::Table)
    }

    pub fn page_break(&self) -> ContentBlock {
        ContentBlock::PageBreak
    }

    /// Empty paragraph that only contributes vertical space.
    pub fn spacer(&self, before: u32) -> ContentBlock {
        ContentBlock::Paragraph(Paragraph::new().space_before(before))
    }

    /// Centered title-page line.
    pub fn title_line(&self, text: &str, style: &TitleStyle) -> ContentBlock {
        let mut run = TextRun::new(text).bold(style.bold).size(style.size);
        if let Some(ref color) = style.color {
            run = run.color(color.as_str());
        }
        ContentBlock::Paragraph(Paragraph::new().alignment(Alignment::Center).add_run(run))
    }

    /// Paragraph attached to the list definition named by `reference`.
    ///
    /// The reference is checked when the block is pushed into a
    /// [`DocumentTree`](crate::model::DocumentTree).
    pub fn list_item(&self, reference: &str, text: &str) -> ContentBlock {
        ContentBlock::Paragraph(
            Paragraph::new()
                .numbering(NumberingRef::new(reference))
                .add_run(TextRun::new(text).size(self.theme.body_size)),
        )
    }

    /// Running header paragraph: right-aligned, muted.
    pub fn running_header(&self, text: &str) -> Paragraph {
        let style = &self.theme.page_text;
        Paragraph::new().alignment(Alignment::Right).add_run(
            TextRun::new(text)
                .italic(style.header_italic)
                .size(style.header_size)
                .color(style.header_color.as_str()),
        )
    }

    /// Footer paragraph reading "Page N of M".
    pub fn page_number_footer(&self) -> Paragraph {
        let size = self.theme.page_text.footer_size;
        Paragraph::new()
            .alignment(Alignment::Center)
            .add_run(TextRun::new("Page ").size(size))
            .add_run(TextRun::page_number().size(size))
            .add_run(TextRun::new(" of ").size(size))
            .add_run(TextRun::page_count().size(size))
    }
}
