/// Table types: fixed-column tables with header and banded rows.
use crate::error::{Error, Result};
use serde::Deserialize;

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Single,
    Double,
    Dotted,
    Dashed,
}

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

/// Border applied to every cell edge of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    /// Border width in eighths of a point
    pub size: u32,
    /// Border color in hex RGB
    pub color: String,
}

/// Fills and text attributes resolved from the theme when a table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLook {
    pub border: Border,
    pub header_fill: String,
    pub header_text_color: String,
    pub alternate_fill: String,
    /// Cell text size in half-points
    pub text_size: u32,
}

/// One table row: cell texts in column order plus presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Header rows repeat on each page and use the header fill
    pub header: bool,
    /// Alternate rows use the banded fill
    pub alternate: bool,
}

impl TableRow {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// A table with explicit column widths.
///
/// Every row holds exactly one cell per column; this is checked by
/// [`Table::new`], so a constructed table is always rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column widths in twips
    column_widths: Vec<u32>,
    rows: Vec<TableRow>,
    look: TableLook,
}

impl Table {
    /// Create a table, rejecting empty tables and rows whose cell count
    /// differs from the number of columns.
    pub fn new(column_widths: Vec<u32>, rows: Vec<TableRow>, look: TableLook) -> Result<Self> {
        if column_widths.is_empty() {
            return Err(Error::InvalidArgument(
                "Table must have at least one column".to_string(),
            ));
        }
        if rows.is_empty() {
            return Err(Error::InvalidArgument(
                "Table must have at least one row".to_string(),
            ));
        }
        let expected = column_widths.len();
        if let Some((row, found)) = rows
            .iter()
            .map(TableRow::cell_count)
            .enumerate()
            .find(|&(_, count)| count != expected)
        {
            return Err(Error::ColumnMismatch {
                row,
                expected,
                found,
            });
        }
        Ok(Self {
            column_widths,
            rows,
            look,
        })
    }

    pub fn column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn look(&self) -> &TableLook {
        &self.look
    }

    /// Total width in twips.
    pub fn width(&self) -> u32 {
        self.column_widths.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look() -> TableLook {
        TableLook {
            border: Border {
                style: BorderStyle::Single,
                size: 1,
                color: "CCCCCC".to_string(),
            },
            header_fill: "1a365d".to_string(),
            header_text_color: "FFFFFF".to_string(),
            alternate_fill: "f7fafc".to_string(),
            text_size: 22,
        }
    }

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
            header: false,
            alternate: false,
        }
    }

    #[test]
    fn test_rectangular_table() {
        let rows = vec![row(&["a", "b"]), row(&["c", "d"])];
        let table = Table::new(vec![3000, 6360], rows, look()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_widths().len(), 2);
        assert_eq!(table.width(), 9360);
    }

    #[test]
    fn test_mismatch_reports_row() {
        let err = Table::new(
            vec![3000, 6360],
            vec![row(&["a", "b"]), row(&["c", "d"]), row(&["e"])],
            look(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnMismatch {
                row: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_tables_rejected() {
        assert!(matches!(
            Table::new(vec![], vec![row(&[])], look()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Table::new(vec![1000], vec![], look()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
