use once_cell::sync::Lazy;
use regex::Regex;

static PLAYLIST_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":playlist:([A-Za-z0-9]{22})").unwrap());
static STYLE_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)color:\s+#([0-9a-f]{6})").unwrap());
static LABEL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s+").unwrap());

/// Noise stripped from row titles before the label is taken, applied in order.
const TITLE_NOISE: [&str; 3] = ["average duration", " bpm", "%"];

/// One row of a genre ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub id: String,
    pub label: Option<String>,
    pub color: Option<u16>,
}

impl Genre {
    /// The name read backwards, used for suffix ordering.
    pub fn reversed_name(&self) -> String {
        self.name.chars().rev().collect()
    }
}

/// Pack a 24-bit RGB color into RGB565.
pub fn color_565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xF8) << 8) | ((u16::from(g) & 0xFC) << 3) | (u16::from(b) >> 3)
}

/// Extract the 22 character playlist id from a `spotify:playlist:` link.
pub fn playlist_id(href: &str) -> Option<&str> {
    PLAYLIST_ID
        .captures(href)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Find a `color: #rrggbb` declaration in an inline style and pack it.
pub fn style_color(style: &str) -> Option<u16> {
    let hex = STYLE_COLOR.captures(style)?.get(1)?.as_str();
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(color_565(channel(0)?, channel(2)?, channel(4)?))
}

/// Reduce a row title such as `"average tempo: 120 bpm"` to its value.
///
/// Each noise substring is removed once, then the text is split on `": "`
/// and the last non-empty segment is kept.
pub fn label_from_title(title: &str) -> Option<String> {
    let stripped = TITLE_NOISE
        .iter()
        .fold(title.to_string(), |acc, noise| acc.replacen(noise, "", 1));

    LABEL_SEPARATOR
        .split(&stripped)
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}
