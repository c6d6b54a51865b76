//! In-memory document tree.
//!
//! These types describe what the document contains and how it looks. They
//! carry no serialization logic; the [`writer`](crate::writer) module turns a
//! [`DocumentTree`] into WordprocessingML parts.

pub mod block;
pub mod document;
pub mod numbering;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod table;

pub use block::ContentBlock;
pub use document::{DocumentProperties, DocumentTree, StyleSheet};
pub use numbering::{ListDefinition, ListFormat, NumberingRef};
pub use paragraph::{Alignment, Paragraph};
pub use run::{RunContent, TextRun};
pub use section::{PageOrientation, PageSetup};
pub use table::{Border, BorderStyle, Table, TableLook, TableRow};
