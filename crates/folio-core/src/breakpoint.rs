//! Responsive breakpoint table.
//!
//! Each component only consults the tiers relevant to its own layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named viewport width tiers, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    /// Small phones.
    MobileSmall,
    /// Large phones.
    MobileLarge,
    /// Tablets.
    Tablet,
    /// Laptops and wider.
    Laptop,
}

impl Breakpoint {
    /// All tiers in ascending width order.
    pub const ALL: [Breakpoint; 4] = [
        Self::MobileSmall,
        Self::MobileLarge,
        Self::Tablet,
        Self::Laptop,
    ];

    /// Threshold width in CSS pixels.
    pub const fn width_px(self) -> u32 {
        match self {
            Self::MobileSmall => 320,
            Self::MobileLarge => 425,
            Self::Tablet => 768,
            Self::Laptop => 1024,
        }
    }

    /// Media query matching viewports at least this wide.
    pub fn min_width(self) -> String {
        format!("(min-width: {}px)", self.width_px())
    }

    /// Media query matching viewports at most this wide.
    pub fn max_width(self) -> String {
        format!("(max-width: {}px)", self.width_px())
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MobileSmall => "mobile-small",
            Self::MobileLarge => "mobile-large",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_queries() {
        assert_eq!(Breakpoint::Laptop.min_width(), "(min-width: 1024px)");
        assert_eq!(Breakpoint::Tablet.max_width(), "(max-width: 768px)");
        assert_eq!(Breakpoint::MobileLarge.max_width(), "(max-width: 425px)");
    }

    #[test]
    fn test_tiers_ascend() {
        let widths: Vec<_> = Breakpoint::ALL.iter().map(|b| b.width_px()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn test_display() {
        assert_eq!(Breakpoint::MobileSmall.to_string(), "mobile-small");
        assert_eq!(Breakpoint::Laptop.to_string(), "laptop");
    }
}
