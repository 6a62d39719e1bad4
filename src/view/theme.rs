//! Presentation themes
//!
//! The renderer is the same for every theme; only the palette changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours used by the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#FAFAFA",
                surface: "#FFFFFF",
                text: "#121212",
                muted: "#888888",
                border: "#EDEDED",
                accent: "#121212",
            },
            Theme::Dark => Palette {
                background: "#0A0A0A",
                surface: "#171717",
                text: "#F5F5F5",
                muted: "#A3A3A3",
                border: "#262626",
                accent: "#EC4899",
            },
        }
    }

    /// Inline stylesheet for this theme
    pub fn stylesheet(&self) -> String {
        let p = self.palette();
        format!(
            "body{{margin:0;font-family:Inter,system-ui,sans-serif;background:{bg};color:{text}}}\
header.site,footer.site{{padding:24px 48px;background:{surface};border-color:{border}}}\
header.site{{display:flex;justify-content:space-between;align-items:center;border-bottom:1px solid {border}}}\
header.site a{{padding:8px 16px;border-radius:8px;background:{accent};color:{surface};text-decoration:none;font-size:14px}}\
footer.site{{text-align:center;font-size:14px;color:{muted};border-top:1px solid {border}}}\
main{{padding:48px;max-width:1200px;margin:0 auto}}\
.grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:24px}}\
.block,.card{{display:block;padding:16px;border:1px solid {border};border-radius:12px;background:{surface};color:inherit;text-decoration:none}}\
.card p,.block h3{{color:{muted}}}\
.section{{margin-bottom:40px}}\
.tag{{display:inline-block;margin:0 8px 8px 0;padding:4px 10px;border-radius:999px;border:1px solid {border}}}\
.palette{{display:inline-block;width:20px;height:20px;margin-right:6px;border-radius:4px;border:1px solid {border}}}\
.download-btn{{padding:8px 16px;border-radius:8px;background:{accent};color:{surface};text-decoration:none}}\
table{{width:100%;border-collapse:collapse}}th,td{{padding:8px;border-bottom:1px solid {border};text-align:left}}",
            bg = p.background,
            surface = p.surface,
            text = p.text,
            muted = p.muted,
            border = p.border,
            accent = p.accent,
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected 'light' or 'dark'", other)),
        }
    }
}
