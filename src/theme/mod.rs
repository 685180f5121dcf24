//! Visual themes as pure data: a closed identifier enum selecting from a
//! static configuration table.

use strum::{Display, EnumIter, EnumString};

/// Theme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeId {
    /// Song-dynasty rice paper: the default "classical study" look.
    #[default]
    Song,
    Modern,
    Cyber,
    Journal,
    Magazine,
    Candy,
    Forest,
    Sunset,
    Ocean,
}

/// Palette and typography for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: &'static str,
    pub background: &'static str,
    pub panel: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub font_family: &'static str,
}

const SERIF: &str = "Georgia, 'Songti SC', 'Noto Serif SC', serif";
const SANS: &str = "'Helvetica Neue', 'PingFang SC', sans-serif";
const MONO: &str = "'JetBrains Mono', 'SF Mono', monospace";

impl ThemeId {
    /// Look up the theme's static configuration.
    pub fn config(&self) -> &'static ThemeConfig {
        match self {
            ThemeId::Song => &ThemeConfig {
                name: "Song",
                background: "#EBE5CE",
                panel: "#F7F5F0",
                card: "#FDFCF8",
                text: "#2C2C2C",
                muted: "#7A7067",
                accent: "#984B43",
                border: "#D1C0A5",
                font_family: SERIF,
            },
            ThemeId::Modern => &ThemeConfig {
                name: "Modern",
                background: "#F4F4F5",
                panel: "#FFFFFF",
                card: "#FFFFFF",
                text: "#18181B",
                muted: "#71717A",
                accent: "#2563EB",
                border: "#E4E4E7",
                font_family: SANS,
            },
            ThemeId::Cyber => &ThemeConfig {
                name: "Cyber",
                background: "#0A0A0F",
                panel: "#12121A",
                card: "#1A1A24",
                text: "#E4E4F0",
                muted: "#8888A0",
                accent: "#00E5A0",
                border: "#2A2A3A",
                font_family: MONO,
            },
            ThemeId::Journal => &ThemeConfig {
                name: "Journal",
                background: "#FAF6EF",
                panel: "#FFFDF8",
                card: "#FFFFFF",
                text: "#3B3226",
                muted: "#8C7F6D",
                accent: "#B07D48",
                border: "#E5DCC9",
                font_family: SERIF,
            },
            ThemeId::Magazine => &ThemeConfig {
                name: "Magazine",
                background: "#FFFFFF",
                panel: "#FAFAFA",
                card: "#FFFFFF",
                text: "#111111",
                muted: "#666666",
                accent: "#D92626",
                border: "#DDDDDD",
                font_family: SANS,
            },
            ThemeId::Candy => &ThemeConfig {
                name: "Candy",
                background: "#FFF0F5",
                panel: "#FFF8FB",
                card: "#FFFFFF",
                text: "#4A2B3A",
                muted: "#A8758F",
                accent: "#E84393",
                border: "#F5D0E0",
                font_family: SANS,
            },
            ThemeId::Forest => &ThemeConfig {
                name: "Forest",
                background: "#EEF2EA",
                panel: "#F7FAF4",
                card: "#FDFEFB",
                text: "#243321",
                muted: "#6B7D64",
                accent: "#3E7C42",
                border: "#D3DECB",
                font_family: SERIF,
            },
            ThemeId::Sunset => &ThemeConfig {
                name: "Sunset",
                background: "#FFF3E6",
                panel: "#FFF9F0",
                card: "#FFFDF8",
                text: "#45291A",
                muted: "#9B7054",
                accent: "#E8690A",
                border: "#F3D9BC",
                font_family: SANS,
            },
            ThemeId::Ocean => &ThemeConfig {
                name: "Ocean",
                background: "#E8F1F5",
                panel: "#F2F8FB",
                card: "#FBFDFE",
                text: "#15303D",
                muted: "#5B7A8A",
                accent: "#0E7490",
                border: "#CBDFE8",
                font_family: SANS,
            },
        }
    }
}
