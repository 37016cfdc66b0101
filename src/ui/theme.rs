use crate::bmi::Category;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // IMC category colors, one per legend entry
    pub bmi_underweight: ColorSpec,
    pub bmi_normal: ColorSpec,
    pub bmi_overweight: ColorSpec,
    pub bmi_obesity_moderate: ColorSpec,
    pub bmi_obesity_severe: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

    /// Look up a theme by configured name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Return the fixed color for an IMC category, or the neutral muted color
    /// when no value has been computed yet.
    ///
    pub fn bmi_category_color(&self, category: Option<Category>) -> Color {
        match category {
            None => self.text_muted.to_color(),
            Some(Category::Underweight) => self.bmi_underweight.to_color(),
            Some(Category::Normal) => self.bmi_normal.to_color(),
            Some(Category::Overweight) => self.bmi_overweight.to_color(),
            Some(Category::ModerateObesity) => self.bmi_obesity_moderate.to_color(),
            Some(Category::SevereObesity) => self.bmi_obesity_severe.to_color(),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            secondary: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            accent: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            banner: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Cyan
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Subtext
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Yellow
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Cyan
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            }, // Dark blue
            ..Self::category_palette("tokyo-night")
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            secondary: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Green
            accent: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            banner: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            text: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            text_secondary: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            }, // Subtext
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            success: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Pine
            warning: ColorSpec {
                r: 255,
                g: 210,
                b: 0,
            }, // Gold
            error: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            info: ColorSpec {
                r: 61,
                g: 174,
                b: 233,
            }, // Foam
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            border_normal: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            ..Self::category_palette("rose-pine-dawn")
        }
    }

    /// The IMC category colors are semantic and shared by every theme.
    ///
    fn category_palette(name: &str) -> Self {
        Theme {
            name: name.to_string(),
            primary: ColorSpec { r: 0, g: 0, b: 0 },
            secondary: ColorSpec { r: 0, g: 0, b: 0 },
            accent: ColorSpec { r: 0, g: 0, b: 0 },
            banner: ColorSpec { r: 0, g: 0, b: 0 },
            text: ColorSpec { r: 0, g: 0, b: 0 },
            text_secondary: ColorSpec { r: 0, g: 0, b: 0 },
            text_muted: ColorSpec { r: 0, g: 0, b: 0 },
            success: ColorSpec { r: 0, g: 0, b: 0 },
            warning: ColorSpec { r: 0, g: 0, b: 0 },
            error: ColorSpec { r: 0, g: 0, b: 0 },
            info: ColorSpec { r: 0, g: 0, b: 0 },
            border_active: ColorSpec { r: 0, g: 0, b: 0 },
            border_normal: ColorSpec { r: 0, g: 0, b: 0 },
            bmi_underweight: ColorSpec {
                r: 74,
                g: 144,
                b: 226,
            }, // Blue
            bmi_normal: ColorSpec {
                r: 46,
                g: 204,
                b: 113,
            }, // Green
            bmi_overweight: ColorSpec {
                r: 245,
                g: 166,
                b: 35,
            }, // Orange
            bmi_obesity_moderate: ColorSpec {
                r: 255,
                g: 127,
                b: 80,
            }, // Coral
            bmi_obesity_severe: ColorSpec {
                r: 231,
                g: 76,
                b: 60,
            }, // Red
        }
    }
}
