//! Nearest Tailwind color name for a Figma RGBA value.
//!
//! The token table is built once per process from the Tailwind CSS v3.4
//! default palette, in its sRGB hex form. The v4 palette is defined in oklch
//! and converts to different bytes, so off-palette inputs near a shade
//! boundary can resolve to a different name under v4.
//! Lookups try an exact 8-digit hex match first and fall back to the entry
//! with the smallest Euclidean distance in RGBA byte space. Ties go to the
//! entry that appears first in the palette.

use palette::{Srgb, Srgba, WithAlpha};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::figma::Color;

const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Colors without shades: (name, rgb hex, alpha).
const SINGLE_COLORS: &[(&str, &str, u8)] = &[
    ("transparent", "#000000", 0x00),
    ("black", "#000000", 0xff),
    ("white", "#ffffff", 0xff),
];

const SHADED_COLORS: &[(&str, [&str; 11])] = &[
    ("slate", ["#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155", "#1e293b", "#0f172a", "#020617"]),
    ("gray", ["#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151", "#1f2937", "#111827", "#030712"]),
    ("zinc", ["#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46", "#27272a", "#18181b", "#09090b"]),
    ("neutral", ["#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040", "#262626", "#171717", "#0a0a0a"]),
    ("stone", ["#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e", "#44403c", "#292524", "#1c1917", "#0c0a09"]),
    ("red", ["#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a"]),
    ("orange", ["#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c", "#9a3412", "#7c2d12", "#431407"]),
    ("amber", ["#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309", "#92400e", "#78350f", "#451a03"]),
    ("yellow", ["#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207", "#854d0e", "#713f12", "#422006"]),
    ("lime", ["#f7fee7", "#ecfccb", "#d9f99d", "#bef264", "#a3e635", "#84cc16", "#65a30d", "#4d7c0f", "#3f6212", "#365314", "#1a2e05"]),
    ("green", ["#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d", "#166534", "#14532d", "#052e16"]),
    ("emerald", ["#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857", "#065f46", "#064e3b", "#022c22"]),
    ("teal", ["#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e", "#115e59", "#134e4a", "#042f2e"]),
    ("cyan", ["#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490", "#155e75", "#164e63", "#083344"]),
    ("sky", ["#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49"]),
    ("blue", ["#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554"]),
    ("indigo", ["#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca", "#3730a3", "#312e81", "#1e1b4b"]),
    ("violet", ["#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065"]),
    ("purple", ["#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764"]),
    ("fuchsia", ["#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#c026d3", "#a21caf", "#86198f", "#701a75", "#4a044e"]),
    ("pink", ["#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d", "#9d174d", "#831843", "#500724"]),
    ("rose", ["#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e", "#e11d48", "#be123c", "#9f1239", "#881337", "#4c0519"]),
];

/// One named palette entry.
#[derive(Debug, Clone)]
pub struct ColorToken {
    pub rgba: Srgba<u8>,
    pub name: String,
}

impl ColorToken {
    pub fn hex(&self) -> String {
        hex8(self.rgba)
    }
}

/// Palette entries in palette order, indexed by their 8-digit hex.
#[derive(Debug)]
pub struct ColorTable {
    tokens: Vec<ColorToken>,
    by_hex: HashMap<String, usize>,
}

impl ColorTable {
    /// Process-wide table built from the Tailwind base palette.
    pub fn tailwind() -> &'static ColorTable {
        static TABLE: OnceLock<ColorTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let singles = SINGLE_COLORS
                .iter()
                .filter_map(|(name, hex, alpha)| parse_entry(name, hex, *alpha));
            let shaded = SHADED_COLORS.iter().flat_map(|(family, hexes)| {
                SHADES
                    .iter()
                    .zip(hexes.iter())
                    .filter_map(move |(shade, hex)| {
                        parse_entry(&format!("{family}-{shade}"), hex, 0xff)
                    })
            });
            ColorTable::from_tokens(singles.chain(shaded))
        })
    }

    /// Build a table; a repeated hex keeps its first position but takes the later name.
    pub fn from_tokens(tokens: impl IntoIterator<Item = ColorToken>) -> Self {
        let mut table = ColorTable {
            tokens: Vec::new(),
            by_hex: HashMap::new(),
        };
        for token in tokens {
            let hex = token.hex();
            match table.by_hex.get(&hex) {
                Some(&idx) => table.tokens[idx].name = token.name,
                None => {
                    table.by_hex.insert(hex, table.tokens.len());
                    table.tokens.push(token);
                }
            }
        }
        table
    }

    pub fn tokens(&self) -> &[ColorToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn exact(&self, hex: &str) -> Option<&str> {
        self.by_hex
            .get(hex)
            .map(|&idx| self.tokens[idx].name.as_str())
    }

    /// Entry with the smallest RGBA distance; the first minimum wins.
    pub fn nearest(&self, rgba: Srgba<u8>) -> Option<&str> {
        let mut closest: Option<&ColorToken> = None;
        let mut min_dist = f64::INFINITY;
        for token in &self.tokens {
            let dist = rgba_distance(rgba, token.rgba);
            if dist < min_dist {
                min_dist = dist;
                closest = Some(token);
            }
        }
        closest.map(|token| token.name.as_str())
    }

    pub fn resolve(&self, rgba: Srgba<u8>) -> Option<&str> {
        self.exact(&hex8(rgba)).or_else(|| self.nearest(rgba))
    }
}

fn parse_entry(name: &str, hex: &str, alpha: u8) -> Option<ColorToken> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(ColorToken {
        rgba: rgb.with_alpha(alpha),
        name: name.to_string(),
    })
}

/// Quantize a normalized Figma color to bytes, folding `opacity` into alpha.
pub fn to_rgba8(color: &Color, opacity: f64) -> Srgba<u8> {
    Srgba::new(
        channel_byte(color.r),
        channel_byte(color.g),
        channel_byte(color.b),
        channel_byte(color.a * opacity),
    )
}

fn channel_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Lowercase `#rrggbbaa`.
pub fn hex8(rgba: Srgba<u8>) -> String {
    let (r, g, b, a) = rgba.into_components();
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

pub fn rgba_distance(lhs: Srgba<u8>, rhs: Srgba<u8>) -> f64 {
    let (r1, g1, b1, a1) = lhs.into_components();
    let (r2, g2, b2, a2) = rhs.into_components();
    let d = |x: u8, y: u8| (f64::from(x) - f64::from(y)).powi(2);
    (d(r1, r2) + d(g1, g2) + d(b1, b2) + d(a1, a2)).sqrt()
}

/// Tailwind color name for a Figma color, e.g. `blue-500`.
pub fn resolve_color(color: &Color, opacity: f64) -> String {
    ColorTable::tailwind()
        .resolve(to_rgba8(color, opacity))
        .unwrap_or("black")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_uses_v3_hex_values() {
        let table = ColorTable::tailwind();
        assert_eq!(table.exact("#3b82f6ff"), Some("blue-500"));
        assert_eq!(table.exact("#ef4444ff"), Some("red-500"));
        assert_eq!(table.exact("#020617ff"), Some("slate-950"));
    }

    fn color_from(rgba: Srgba<u8>) -> Color {
        let (r, g, b, a) = rgba.into_components();
        Color {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    #[test]
    fn table_contains_every_palette_entry() {
        let table = ColorTable::tailwind();
        // zinc-50 and neutral-50 share #fafafa.
        assert_eq!(table.len(), SINGLE_COLORS.len() + SHADED_COLORS.len() * 11 - 1);
        assert_eq!(table.exact("#3b82f6ff"), Some("blue-500"));
        assert_eq!(table.exact("#00000000"), Some("transparent"));
    }

    #[test]
    fn duplicate_hex_keeps_later_name() {
        assert_eq!(ColorTable::tailwind().exact("#fafafaff"), Some("neutral-50"));
    }

    #[test]
    fn hex8_is_lowercase_and_padded() {
        assert_eq!(hex8(Srgba::new(1, 171, 15, 255)), "#01ab0fff");
    }

    #[test]
    fn to_rgba8_folds_opacity_into_alpha() {
        let color = Color {
            r: 1.0,
            g: 0.5,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(hex8(to_rgba8(&color, 0.5)), "#ff800080");
    }

    #[test]
    fn every_palette_color_resolves_to_itself() {
        let table = ColorTable::tailwind();
        for token in table.tokens() {
            let color = color_from(token.rgba);
            let hex = hex8(to_rgba8(&color, 1.0));
            assert_eq!(table.exact(&hex), Some(token.name.as_str()));
            assert_eq!(resolve_color(&color, 1.0), token.name);
        }
    }

    #[test]
    fn off_palette_color_picks_the_nearest_entry() {
        let table = ColorTable::tailwind();
        let samples = [
            Srgba::new(0x3a, 0x80, 0xf0, 0xff),
            Srgba::new(0x10, 0x10, 0x10, 0xff),
            Srgba::new(0xff, 0x00, 0x00, 0x80),
            Srgba::new(0x7f, 0x7f, 0x7f, 0xff),
            Srgba::new(0x00, 0xff, 0x80, 0x20),
        ];

        for sample in samples {
            let name = table.resolve(sample).expect("non-empty table");
            let chosen = table
                .tokens()
                .iter()
                .find(|t| t.name == name)
                .expect("chosen entry");
            let chosen_dist = rgba_distance(sample, chosen.rgba);
            for other in table.tokens() {
                assert!(
                    rgba_distance(sample, other.rgba) >= chosen_dist,
                    "{} is closer to {} than {}",
                    other.name,
                    hex8(sample),
                    name
                );
            }
        }
    }

    #[test]
    fn nearest_ties_go_to_the_first_entry() {
        let table = ColorTable::from_tokens([
            ColorToken {
                rgba: Srgba::new(0, 0, 0, 255),
                name: "first".into(),
            },
            ColorToken {
                rgba: Srgba::new(20, 0, 0, 255),
                name: "second".into(),
            },
        ]);
        assert_eq!(table.nearest(Srgba::new(10, 0, 0, 255)), Some("first"));
    }

    #[test]
    fn slightly_off_blue_maps_to_blue_500() {
        let color = Color {
            r: 0.23,
            g: 0.51,
            b: 0.96,
            a: 1.0,
        };
        assert_eq!(resolve_color(&color, 1.0), "blue-500");
    }
}
