//! Specdoc - generator for the HouseCall Pro MCP Server technical specification
//!
//! This library assembles the specification as an in-memory document tree and
//! packages it as a WordprocessingML (`.docx`) file.
//!
//! # Features
//!
//! - **Theme**: every color, size and spacing value in one structure,
//!   overridable from YAML
//! - **Assembler**: small constructors for headings, paragraphs, code lines,
//!   tables and list items
//! - **Packager**: deterministic ZIP packaging with styles, numbering, running
//!   header and a page-numbered footer
//! - **Atomic output**: documents are written through a temporary file
//!
//! # Example - Generating the document
//!
//! ```no_run
//! use specdoc::{Packager, Theme, build_document};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = build_document(&Theme::default())?;
//! Packager::save(&tree, "HCP_MCP_Technical_Specification_v1.docx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building custom content
//!
//! ```
//! use specdoc::model::{DocumentTree, StyleSheet};
//! use specdoc::{Assembler, Packager, Theme};
//!
//! # fn main() -> specdoc::Result<()> {
//! let theme = Theme::default();
//! let asm = Assembler::new(&theme);
//!
//! let mut tree = DocumentTree::new(StyleSheet::from_theme(&theme), theme.page.clone());
//! tree.push(asm.heading(1, "1. Overview")?)?;
//! tree.push(asm.para("Body text"))?;
//!
//! let bytes = Packager::to_bytes(&tree)?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod content;
pub mod error;
pub mod model;
pub mod output;
pub mod theme;
pub mod writer;
pub mod xml;

pub use assembler::{Assembler, ParagraphOptions, TitleStyle};
pub use content::{DEFAULT_OUTPUT, build_document};
pub use error::{Error, Result};
pub use model::{ContentBlock, DocumentTree};
pub use theme::Theme;
pub use writer::Packager;

/// Build the specification with `theme` and package it into DOCX bytes.
pub fn generate(theme: &Theme) -> Result<Vec<u8>> {
    let tree = build_document(theme)?;
    Packager::to_bytes(&tree)
}
