//! Configuration for the auto-plot widget.
//!
//! These are fixed presentation defaults, not a theming system: the values
//! mirror the plotting defaults the widget was designed around (thin lines,
//! small open markers, grid on, viridis).

use crate::colormap::Colormap;

// ─────────────────────────────────────────────────────────────────────────────
// AutoPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the auto-plot widget and the standalone runner.
#[derive(Clone)]
pub struct AutoPlotConfig {
    // ── Data presentation ────────────────────────────────────────────────────
    /// Colormap for pseudocolor meshes and colored scatters.
    pub colormap: Colormap,
    /// Maximum number of dependent labels joined into a shared y-axis label
    /// before truncating with `[...]`.
    pub max_y_labels: usize,

    // ── Canvas ───────────────────────────────────────────────────────────────
    /// Show the plot grid.
    pub show_grid: bool,
    /// Show the legend on 1-D panels.
    pub show_legend: bool,
    /// Link zoom/pan across the subplots of a 2-axis figure.
    pub link_axes: bool,
    /// Show the compact controls row above the plots.
    pub controls: bool,
    /// Spacing between subplots, in points.
    pub subplot_spacing: f32,

    // ── Marks ────────────────────────────────────────────────────────────────
    /// Line width for 1-D traces.
    pub line_width: f32,
    /// Marker radius for 1-D traces.
    pub marker_radius: f32,
    /// Point radius for 2-D scatters.
    pub scatter_radius: f32,
    /// Width of the colorbar strip, in points.
    pub colorbar_width: f32,

    // ── Window (standalone runner) ───────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for AutoPlotConfig {
    fn default() -> Self {
        Self {
            colormap: Colormap::default(),
            max_y_labels: 3,

            show_grid: true,
            show_legend: true,
            link_axes: true,
            controls: true,
            subplot_spacing: 8.0,

            line_width: 1.0,
            marker_radius: 2.0,
            scatter_radius: 2.5,
            colorbar_width: 14.0,

            title: "AutoPlot".to_string(),
            native_options: None,
        }
    }
}
