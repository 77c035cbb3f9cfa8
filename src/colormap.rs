//! Colormaps for mapping dependent values to colors.
//!
//! Used by the pseudocolor mesh and the colored scatter fallback. Palettes
//! are piecewise-linear approximations of the common scientific colormaps.

use egui::Color32;

/// Named colormaps for value-based coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    /// Perceptually uniform (dark purple → green → yellow); the default.
    Viridis,
    /// Perceptually uniform with more purple/yellow tones.
    Plasma,
    /// Improved rainbow (blue → cyan → yellow → red).
    Turbo,
    /// Classic heat map (black → red → yellow).
    Heat,
    /// Simple grayscale (black → white).
    Grayscale,
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::Viridis
    }
}

impl Colormap {
    /// All selectable colormaps, for the widget's combo box.
    pub const ALL: [Colormap; 5] = [
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Turbo,
        Colormap::Heat,
        Colormap::Grayscale,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "Viridis",
            Colormap::Plasma => "Plasma",
            Colormap::Turbo => "Turbo",
            Colormap::Heat => "Heat",
            Colormap::Grayscale => "Grayscale",
        }
    }

    /// Sample the colormap at position `t` in `[0, 1]` (clamped).
    pub fn sample(&self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::Viridis => sample_palette(&VIRIDIS, t),
            Colormap::Plasma => sample_palette(&PLASMA, t),
            Colormap::Turbo => sample_palette(&TURBO, t),
            Colormap::Heat => sample_palette(&HEAT, t),
            Colormap::Grayscale => {
                let v = (t * 255.0).round() as u8;
                Color32::from_rgb(v, v, v)
            }
        }
    }
}

/// Normalize `v` into `[0, 1]` over `[min, max]`; NaN maps to NaN, a
/// zero-width range maps everything to 0.5.
pub fn normalize(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() {
        return f64::NAN;
    }
    if max > min {
        ((v - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

type Stop = (f32, [f32; 3]);

const VIRIDIS: [Stop; 6] = [
    (0.0, [0.267, 0.004, 0.329]),
    (0.25, [0.282, 0.140, 0.458]),
    (0.5, [0.204, 0.286, 0.469]),
    (0.6, [0.128, 0.400, 0.369]),
    (0.75, [0.527, 0.510, 0.149]),
    (1.0, [0.993, 0.906, 0.144]),
];

const PLASMA: [Stop; 6] = [
    (0.0, [0.050, 0.030, 0.530]),
    (0.25, [0.275, 0.005, 0.610]),
    (0.5, [0.553, 0.027, 0.416]),
    (0.6, [0.764, 0.190, 0.217]),
    (0.75, [0.960, 0.380, 0.113]),
    (1.0, [0.940, 0.975, 0.131]),
];

const TURBO: [Stop; 7] = [
    (0.0, [0.180, 0.070, 0.450]),
    (0.2, [0.000, 0.300, 0.740]),
    (0.4, [0.000, 0.780, 0.870]),
    (0.5, [0.000, 0.980, 0.600]),
    (0.6, [0.850, 0.970, 0.110]),
    (0.8, [0.970, 0.430, 0.000]),
    (1.0, [0.880, 0.000, 0.000]),
];

const HEAT: [Stop; 5] = [
    (0.0, [0.000, 0.000, 0.000]),
    (0.25, [0.500, 0.000, 0.000]),
    (0.5, [1.000, 0.000, 0.000]),
    (0.75, [1.000, 0.500, 0.000]),
    (1.0, [1.000, 1.000, 0.000]),
];

fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn to_color32(rgb: [f32; 3]) -> Color32 {
    Color32::from_rgb(
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
    )
}

fn sample_palette(palette: &[Stop], t: f32) -> Color32 {
    if t <= palette[0].0 {
        return to_color32(palette[0].1);
    }
    if t >= palette[palette.len() - 1].0 {
        return to_color32(palette[palette.len() - 1].1);
    }
    for w in palette.windows(2) {
        let (t0, c0) = w[0];
        let (t1, c1) = w[1];
        if t >= t0 && t <= t1 {
            let local = (t - t0) / (t1 - t0);
            return to_color32(lerp_rgb(c0, c1, local));
        }
    }
    to_color32(palette[palette.len() - 1].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_clamps_out_of_range() {
        // Out-of-range inputs must land on the palette endpoints.
        assert_eq!(Colormap::Viridis.sample(1.5), Colormap::Viridis.sample(1.0));
        assert_eq!(
            Colormap::Viridis.sample(-0.5),
            Colormap::Viridis.sample(0.0)
        );
    }

    #[test]
    fn viridis_endpoints() {
        let start = Colormap::Viridis.sample(0.0);
        let end = Colormap::Viridis.sample(1.0);
        // Dark purple start, yellow end.
        assert!(start.r() < 128 && start.b() > 50);
        assert!(end.r() > 230 && end.g() > 200 && end.b() < 80);
    }

    #[test]
    fn normalize_handles_degenerate_range() {
        assert_eq!(normalize(3.0, 1.0, 5.0), 0.5);
        assert_eq!(normalize(7.0, 2.0, 2.0), 0.5);
        assert!(normalize(f64::NAN, 0.0, 1.0).is_nan());
        assert_eq!(normalize(-1.0, 0.0, 1.0), 0.0);
    }
}
