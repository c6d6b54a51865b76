//! Styling configuration for the generated document.
//!
//! A [`Theme`] carries every color, size, spacing and border value the
//! assembler and packager need. The default theme gives the published
//! HouseCall Pro specification layout; a YAML file can override any subset
//! of fields.
//!
//! Units follow WordprocessingML: font sizes are half-points (22 = 11pt),
//! spacing and indentation are twips (1440 = 1 inch), border sizes are
//! eighths of a point.

use crate::error::{Error, Result};
use crate::model::{BorderStyle, PageSetup};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Run and spacing attributes for one heading level.
///
/// Each level has its own defaults, so a YAML override is merged onto the
/// level's default style rather than deserialized on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStyle {
    /// Font size in half-points
    pub size: u32,
    /// Text color in hex RGB
    pub color: String,
    pub bold: bool,
    /// Spacing before the heading in twips
    pub space_before: u32,
    /// Spacing after the heading in twips
    pub space_after: u32,
}

/// Fields of a heading style named in a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeadingOverride {
    size: Option<u32>,
    color: Option<String>,
    bold: Option<bool>,
    space_before: Option<u32>,
    space_after: Option<u32>,
}

impl HeadingOverride {
    fn apply(self, mut style: HeadingStyle) -> HeadingStyle {
        if let Some(size) = self.size {
            style.size = size;
        }
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(space_before) = self.space_before {
            style.space_before = space_before;
        }
        if let Some(space_after) = self.space_after {
            style.space_after = space_after;
        }
        style
    }
}

fn merge_heading<'de, D>(deserializer: D, level: u8) -> std::result::Result<HeadingStyle, D::Error>
where
    D: Deserializer<'de>,
{
    let base = Theme::default()
        .heading_style(level)
        .cloned()
        .map_err(<D::Error as serde::de::Error>::custom)?;
    Ok(HeadingOverride::deserialize(deserializer)?.apply(base))
}

fn heading1<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<HeadingStyle, D::Error> {
    merge_heading(d, 1)
}

fn heading2<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<HeadingStyle, D::Error> {
    merge_heading(d, 2)
}

fn heading3<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<HeadingStyle, D::Error> {
    merge_heading(d, 3)
}

/// Appearance of code listing lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    pub font: String,
    pub size: u32,
    /// Background fill in hex RGB
    pub shading: String,
    pub indent_left: u32,
    pub space_before: u32,
    pub space_after: u32,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            font: "Courier New".to_string(),
            size: 20,
            shading: "f7fafc".to_string(),
            indent_left: 360,
            space_before: 100,
            space_after: 100,
        }
    }
}

/// Borders, fills and text attributes for tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub border_style: BorderStyle,
    pub border_color: String,
    /// Border width in eighths of a point
    pub border_size: u32,
    pub header_fill: String,
    pub header_text_color: String,
    pub alternate_fill: String,
    pub text_size: u32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::Single,
            border_color: "CCCCCC".to_string(),
            border_size: 1,
            header_fill: "1a365d".to_string(),
            header_text_color: "FFFFFF".to_string(),
            alternate_fill: "f7fafc".to_string(),
            text_size: 22,
        }
    }
}

/// Running header and footer text attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageTextStyle {
    pub header_size: u32,
    pub header_color: String,
    pub header_italic: bool,
    pub footer_size: u32,
}

impl Default for PageTextStyle {
    fn default() -> Self {
        Self {
            header_size: 20,
            header_color: "718096".to_string(),
            header_italic: true,
            footer_size: 20,
        }
    }
}

/// Indentation shared by every list definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListStyle {
    pub indent_left: u32,
    pub hanging: u32,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            indent_left: 720,
            hanging: 360,
        }
    }
}

/// Immutable styling configuration passed into the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Document-wide run font
    pub body_font: String,
    /// Document-wide run size in half-points
    pub body_size: u32,
    /// Accent color used by the title page
    pub accent_color: String,
    /// Secondary text color used by subtitles
    pub subtle_color: String,
    /// Muted color used by labels and classification lines
    pub muted_color: String,
    /// Default spacing after a body paragraph
    pub paragraph_space_after: u32,
    /// Spacing after a labeled ("Field: value") paragraph
    pub labeled_space_after: u32,
    #[serde(deserialize_with = "heading1")]
    pub heading1: HeadingStyle,
    #[serde(deserialize_with = "heading2")]
    pub heading2: HeadingStyle,
    #[serde(deserialize_with = "heading3")]
    pub heading3: HeadingStyle,
    pub code: CodeStyle,
    pub table: TableStyle,
    pub page_text: PageTextStyle,
    pub list: ListStyle,
    pub page: PageSetup,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            body_size: 22,
            accent_color: "1a365d".to_string(),
            subtle_color: "4a5568".to_string(),
            muted_color: "718096".to_string(),
            paragraph_space_after: 120,
            labeled_space_after: 80,
            heading1: HeadingStyle {
                size: 32,
                color: "1a365d".to_string(),
                bold: true,
                space_before: 400,
                space_after: 200,
            },
            heading2: HeadingStyle {
                size: 26,
                color: "2d3748".to_string(),
                bold: true,
                space_before: 300,
                space_after: 150,
            },
            heading3: HeadingStyle {
                size: 24,
                color: "4a5568".to_string(),
                bold: true,
                space_before: 200,
                space_after: 100,
            },
            code: CodeStyle::default(),
            table: TableStyle::default(),
            page_text: PageTextStyle::default(),
            list: ListStyle::default(),
            page: PageSetup::default(),
        }
    }
}

impl Theme {
    /// Look up the style for a heading level.
    ///
    /// Only levels 1 to 3 are defined; anything else is an
    /// [`Error::InvalidArgument`].
    pub fn heading_style(&self, level: u8) -> Result<&HeadingStyle> {
        match level {
            1 => Ok(&self.heading1),
            2 => Ok(&self.heading2),
            3 => Ok(&self.heading3),
            _ => Err(Error::InvalidArgument(format!(
                "Heading level must be 1-3, got {}",
                level
            ))),
        }
    }

    /// Parse a theme from YAML. Fields not present keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use specdoc::Theme;
    ///
    /// let theme = Theme::from_yaml_str("body_font: Calibri\nheading1:\n  size: 40\n").unwrap();
    /// assert_eq!(theme.body_font, "Calibri");
    /// assert_eq!(theme.heading1.size, 40);
    /// assert_eq!(theme.heading1.color, Theme::default().heading1.color);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a YAML theme file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read theme {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_lookup_table() {
        let theme = Theme::default();
        let expected = [
            (1, 32, "1a365d", 400, 200),
            (2, 26, "2d3748", 300, 150),
            (3, 24, "4a5568", 200, 100),
        ];
        for (level, size, color, before, after) in expected {
            let style = theme.heading_style(level).unwrap();
            assert_eq!(style.size, size);
            assert_eq!(style.color, color);
            assert_eq!(style.space_before, before);
            assert_eq!(style.space_after, after);
            assert!(style.bold);
        }
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let theme = Theme::default();
        assert!(matches!(theme.heading_style(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(theme.heading_style(4), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_partial_yaml_override() {
        let yaml = "table:\n  header_fill: \"004488\"\ncode:\n  font: Consolas\n";
        let theme = Theme::from_yaml_str(yaml).unwrap();
        assert_eq!(theme.table.header_fill, "004488");
        assert_eq!(theme.table.border_color, "CCCCCC");
        assert_eq!(theme.code.font, "Consolas");
        assert_eq!(theme.code.size, 20);
        assert_eq!(theme.body_font, "Arial");
    }

    #[test]
    fn test_heading_override_keeps_level_defaults() {
        let yaml = "heading1:\n  color: \"003366\"\nheading2:\n  size: 30\nheading3:\n  space_after: 40\n";
        let theme = Theme::from_yaml_str(yaml).unwrap();
        let defaults = Theme::default();

        assert_eq!(theme.heading1.color, "003366");
        assert_eq!(theme.heading1.size, defaults.heading1.size);
        assert_eq!(theme.heading1.space_before, defaults.heading1.space_before);

        assert_eq!(theme.heading2.size, 30);
        assert_eq!(theme.heading2.color, "2d3748");
        assert_eq!(theme.heading2.space_before, 300);
        assert_eq!(theme.heading2.space_after, 150);

        assert_eq!(theme.heading3.space_after, 40);
        assert_eq!(theme.heading3.color, defaults.heading3.color);
        assert_eq!(theme.heading3.size, defaults.heading3.size);
    }

    #[test]
    fn test_border_style_override() {
        let theme = Theme::from_yaml_str("table:\n  border_style: dashed\n").unwrap();
        assert_eq!(theme.table.border_style, BorderStyle::Dashed);
        assert_eq!(theme.table.border_size, 1);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let result = Theme::from_yaml_str("body_size: [1, 2");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_theme_file() {
        let result = Theme::from_path("/nonexistent/theme.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
