use serde::Deserialize;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Page geometry for the single document section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    /// Page width in twips (twentieth of a point, 1440 = 1 inch)
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    pub orientation: PageOrientation,
    /// Top margin in twips
    pub margin_top: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Header distance from top in twips
    pub header_distance: u32,
    /// Footer distance from bottom in twips
    pub footer_distance: u32,
}

impl Default for PageSetup {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            orientation: PageOrientation::Portrait,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl PageSetup {
    /// Page width and height in twips, swapped as needed so the longer edge
    /// runs along the orientation.
    pub fn dimensions(&self) -> (u32, u32) {
        let short = self.page_width.min(self.page_height);
        let long = self.page_width.max(self.page_height);
        match self.orientation {
            PageOrientation::Portrait => (short, long),
            PageOrientation::Landscape => (long, short),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_letter() {
        assert_eq!(PageSetup::default().dimensions(), (12240, 15840));
    }

    #[test]
    fn test_landscape_swaps_edges() {
        let page = PageSetup {
            orientation: PageOrientation::Landscape,
            ..Default::default()
        };
        assert_eq!(page.dimensions(), (15840, 12240));

        let already_wide = PageSetup {
            page_width: 15840,
            page_height: 12240,
            ..page
        };
        assert_eq!(already_wide.dimensions(), (15840, 12240));
    }
}
