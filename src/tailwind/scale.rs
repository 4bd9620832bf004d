//! Fixed Tailwind lookup tables.

/// Spacing scale used for width, height, padding and gap (px -> suffix).
const SPACING: &[(i64, &str)] = &[
    (0, "0"),
    (1, "px"),
    (2, "0.5"),
    (4, "1"),
    (6, "1.5"),
    (8, "2"),
    (10, "2.5"),
    (12, "3"),
    (14, "3.5"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
    (28, "7"),
    (32, "8"),
    (36, "9"),
    (40, "10"),
    (44, "11"),
    (48, "12"),
    (56, "14"),
    (64, "16"),
    (72, "18"),
    (80, "20"),
    (96, "24"),
    (112, "28"),
    (128, "32"),
    (144, "36"),
    (160, "40"),
    (176, "44"),
    (192, "48"),
    (208, "52"),
    (224, "56"),
    (240, "60"),
    (256, "64"),
    (288, "72"),
    (320, "80"),
    (384, "96"),
];

const BORDER_RADIUS: &[(i64, &str)] = &[
    (0, "none"),
    (2, "sm"),
    (6, "md"),
    (8, "lg"),
    (12, "xl"),
    (16, "2xl"),
    (24, "3xl"),
    (9999, "full"),
];

const FONT_SIZE: &[(i64, &str)] = &[
    (12, "xs"),
    (14, "sm"),
    (16, "base"),
    (18, "lg"),
    (20, "xl"),
    (24, "2xl"),
    (30, "3xl"),
    (36, "4xl"),
    (48, "5xl"),
    (60, "6xl"),
    (72, "7xl"),
    (96, "8xl"),
    (128, "9xl"),
];

const FONT_WEIGHT: &[(i64, &str)] = &[
    (100, "thin"),
    (200, "extralight"),
    (300, "light"),
    (400, "normal"),
    (500, "medium"),
    (600, "semibold"),
    (700, "bold"),
    (800, "extrabold"),
    (900, "black"),
];

fn lookup(table: &'static [(i64, &'static str)], key: i64) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, suffix)| *suffix)
}

/// Lookup that only matches integral values; `5.5` never hits the `5` entry.
fn lookup_exact(table: &'static [(i64, &'static str)], value: f64) -> Option<&'static str> {
    if value.fract() != 0.0 || !value.is_finite() {
        return None;
    }
    lookup(table, value as i64)
}

/// Arbitrary-value suffix, e.g. `[13px]` or `[5.5px]`.
pub fn arbitrary_px(value: f64) -> String {
    format!("[{}px]", value)
}

/// Spacing suffix for a pixel value, rounded to the nearest integer first.
pub fn spacing(px: f64) -> String {
    let rounded = px.round();
    lookup_exact(SPACING, rounded)
        .map(str::to_string)
        .unwrap_or_else(|| arbitrary_px(rounded))
}

/// Border radius suffix; the value is looked up as-is, without rounding.
pub fn border_radius(px: f64) -> String {
    lookup_exact(BORDER_RADIUS, px)
        .map(str::to_string)
        .unwrap_or_else(|| arbitrary_px(px))
}

pub fn font_size(px: f64) -> String {
    lookup_exact(FONT_SIZE, px)
        .map(str::to_string)
        .unwrap_or_else(|| arbitrary_px(px))
}

/// Font weights have no arbitrary fallback.
pub fn font_weight(weight: f64) -> Option<&'static str> {
    lookup_exact(FONT_WEIGHT, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_rounds_before_lookup() {
        assert_eq!(spacing(15.6), "4");
        assert_eq!(spacing(1.0), "px");
        assert_eq!(spacing(0.0), "0");
    }

    #[test]
    fn spacing_falls_back_to_rounded_arbitrary_value() {
        assert_eq!(spacing(13.2), "[13px]");
        assert_eq!(spacing(1000.0), "[1000px]");
    }

    #[test]
    fn radius_is_not_rounded() {
        assert_eq!(border_radius(8.0), "lg");
        assert_eq!(border_radius(5.5), "[5.5px]");
        assert_eq!(border_radius(9999.0), "full");
    }

    #[test]
    fn font_size_falls_back_to_arbitrary() {
        assert_eq!(font_size(16.0), "base");
        assert_eq!(font_size(15.0), "[15px]");
    }

    #[test]
    fn font_weight_has_no_fallback() {
        assert_eq!(font_weight(700.0), Some("bold"));
        assert_eq!(font_weight(650.0), None);
    }
}
