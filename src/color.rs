use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};

/// An 8-bit sRGB colour, independent of any UI toolkit.
pub type Rgb8 = Srgb<u8>;

/// Colour for values outside the map's domain.
pub fn fallback_color() -> Rgb8 {
    Srgb::new(128, 128, 128)
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb8> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format::<u8>()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category → colour
// ---------------------------------------------------------------------------

/// Maps the values of one categorical column to distinct colours.
///
/// Built once from a load-time domain, so a value keeps its colour for as long
/// as the map lives no matter which subset is currently displayed.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Rgb8>,
}

impl ColorMap {
    /// Build a colour map from the column's unique values.
    pub fn new(unique_values: &BTreeSet<String>) -> Self {
        let palette = generate_palette(unique_values.len());
        let mapping = unique_values.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a value; grey for anything outside the domain.
    pub fn color_for(&self, value: &str) -> Rgb8 {
        self.mapping.get(value).copied().unwrap_or_else(fallback_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let colours = generate_palette(12);
        assert_eq!(colours.len(), 12);
        let unique: BTreeSet<_> = colours.iter().map(|c| (c.red, c.green, c.blue)).collect();
        assert_eq!(unique.len(), 12);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn same_value_same_colour() {
        let genres = domain(&["Action", "Puzzle", "Sports"]);
        let a = ColorMap::new(&genres);
        let b = ColorMap::new(&genres);
        for g in &genres {
            assert_eq!(a.color_for(g), b.color_for(g));
        }
        assert_ne!(a.color_for("Action"), a.color_for("Sports"));
    }

    #[test]
    fn unknown_values_fall_back_to_grey() {
        let map = ColorMap::new(&domain(&["Action"]));
        assert_eq!(map.color_for("Strategy"), fallback_color());
        assert_ne!(map.color_for("Action"), fallback_color());
    }
}
