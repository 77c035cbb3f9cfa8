//! The embeddable auto-plot widget.
//!
//! `AutoPlot` owns a prepared [`Figure`](crate::figure::Figure) and renders it
//! into any egui container as a grid of interactive `egui_plot` panels with
//! zoom/pan/boxed-zoom, a compact controls row, and painted colorbars for
//! two-axis panels.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::Receiver;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, Polygon};
use tracing::warn;

use crate::colormap::Colormap;
use crate::config::AutoPlotConfig;
use crate::data::DataSet;
use crate::figure::{self, ColorScale, Figure, Panel, PanelKind};
use crate::sink::PlotCommand;

/// Number of color buckets used when batching scatter points by color.
const SCATTER_BUCKETS: usize = 32;
/// Number of slices used to paint the colorbar gradient.
const COLORBAR_SLICES: usize = 64;
/// Vertical space reserved for a panel title.
const TITLE_HEIGHT: f32 = 18.0;
/// Horizontal space reserved for colorbar tick text.
const COLORBAR_TEXT_WIDTH: f32 = 52.0;

/// Auto-plotting widget: give it a dataset, embed it in any egui `Ui`.
pub struct AutoPlot {
    config: AutoPlotConfig,
    figure: Figure,
    rx: Option<Receiver<PlotCommand>>,
    reset_view: bool,
    link_group: egui::Id,
}

impl Default for AutoPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlot {
    pub fn new() -> Self {
        Self::with_config(AutoPlotConfig::default())
    }

    pub fn with_config(config: AutoPlotConfig) -> Self {
        static NEXT_ID: AtomicU32 = AtomicU32::new(1);
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            config,
            figure: Figure::default(),
            rx: None,
            reset_view: false,
            link_group: egui::Id::new(("autoplot_link", n)),
        }
    }

    /// Attach a command receiver; commands are drained during `ui`.
    pub fn with_receiver(mut self, rx: Receiver<PlotCommand>) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn config(&self) -> &AutoPlotConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AutoPlotConfig {
        &mut self.config
    }

    /// The currently prepared figure.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Whether a sink is connected (drives repaint scheduling in the runner).
    pub fn has_receiver(&self) -> bool {
        self.rx.is_some()
    }

    /// Replace the displayed dataset, rebuilding the figure.
    ///
    /// On error the previous figure stays in place.
    pub fn set_data(&mut self, data: &DataSet) -> crate::Result<()> {
        self.figure = figure::build_figure(data, &self.config)?;
        self.reset_view = true;
        Ok(())
    }

    /// Clear the figure.
    pub fn clear(&mut self) {
        self.figure = Figure::default();
        self.reset_view = true;
    }

    /// Drain pending sink commands; the last dataset wins.
    fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };
        let mut latest: Option<PlotCommand> = None;
        while let Ok(cmd) = rx.try_recv() {
            latest = Some(cmd);
        }
        match latest {
            Some(PlotCommand::SetData(data)) => {
                if let Err(err) = self.set_data(&data) {
                    warn!(%err, "rejected dataset from sink");
                }
            }
            Some(PlotCommand::Clear) => self.clear(),
            None => {}
        }
    }

    /// Render the widget into the given `Ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.poll();
        if self.config.controls {
            self.controls_row(ui);
        }

        let reset = std::mem::take(&mut self.reset_view);
        if self.figure.is_empty() {
            return;
        }

        let rect = ui.available_rect_before_wrap();
        let grid = self.figure.grid_spec();
        let cells = grid.cell_rects(rect, self.config.subplot_spacing);
        let multi = self.figure.panels.len() > 1;
        for (idx, panel) in self.figure.panels.iter().enumerate() {
            let Some(cell) = cells.get(idx) else { break };
            panel_ui(
                ui,
                &self.config,
                self.link_group,
                idx,
                panel,
                *cell,
                multi,
                reset,
            );
        }
        ui.advance_cursor_after_rect(rect);
    }

    /// Compact controls: fit-to-view, colormap selection, grid toggle.
    fn controls_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let fit = format!("{} Fit", egui_phosphor::regular::ARROWS_OUT);
            if ui
                .button(fit)
                .on_hover_text("Reset zoom/pan to show all data")
                .clicked()
            {
                self.reset_view = true;
            }
            egui::ComboBox::from_id_salt((self.link_group, "colormap"))
                .selected_text(format!(
                    "{} {}",
                    egui_phosphor::regular::PALETTE,
                    self.config.colormap.name()
                ))
                .show_ui(ui, |ui| {
                    for cm in Colormap::ALL {
                        ui.selectable_value(&mut self.config.colormap, cm, cm.name());
                    }
                });
            ui.checkbox(&mut self.config.show_grid, "Grid");
        });
        ui.separator();
    }
}

/// Render one subplot (title, plot canvas, optional colorbar) into `cell`.
#[allow(clippy::too_many_arguments)]
fn panel_ui(
    ui: &mut egui::Ui,
    config: &AutoPlotConfig,
    link_group: egui::Id,
    idx: usize,
    panel: &Panel,
    cell: egui::Rect,
    multi_panel: bool,
    reset: bool,
) {
    let mut plot_rect = cell;

    if let Some(title) = &panel.title {
        ui.painter().text(
            egui::pos2(cell.center().x, cell.top()),
            egui::Align2::CENTER_TOP,
            title,
            egui::TextStyle::Small.resolve(ui.style()),
            ui.visuals().strong_text_color(),
        );
        plot_rect.min.y += TITLE_HEIGHT;
    }

    let colorbar_rect = panel.color_scale.as_ref().map(|_| {
        let w = config.colorbar_width + COLORBAR_TEXT_WIDTH;
        let cb = egui::Rect::from_min_max(
            egui::pos2(plot_rect.max.x - w, plot_rect.min.y),
            plot_rect.max,
        );
        plot_rect.max.x -= w;
        cb
    });

    let _ = ui.scope_builder(egui::UiBuilder::new().max_rect(plot_rect), |ui| {
        let mut plot = Plot::new(("autoplot_panel", link_group, idx))
            .allow_scroll(false)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_boxed_zoom(true)
            .show_grid(egui::Vec2b::new(config.show_grid, config.show_grid))
            .x_axis_label(panel.x_label.clone())
            .y_axis_label(panel.y_label.clone());

        if config.show_legend && matches!(panel.kind, PanelKind::Lines(_)) {
            plot = plot.legend(Legend::default());
        }
        // Panels of a multi-dependent figure share zoom/pan.
        if config.link_axes && multi_panel {
            plot = plot.link_axis(link_group, egui::Vec2b::new(true, true));
        }
        if reset {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| match &panel.kind {
            PanelKind::Empty => {}
            PanelKind::Lines(traces) => {
                for tr in traces {
                    if tr.with_line {
                        plot_ui.line(
                            Line::new(&tr.name, PlotPoints::from(tr.points.clone()))
                                .width(config.line_width),
                        );
                        // Open markers on top of the line; unnamed so the
                        // legend carries a single entry per trace.
                        plot_ui.points(
                            Points::new("", tr.points.clone())
                                .radius(config.marker_radius)
                                .filled(false),
                        );
                    } else {
                        plot_ui.points(
                            Points::new(&tr.name, tr.points.clone())
                                .radius(config.marker_radius)
                                .filled(false),
                        );
                    }
                }
            }
            PanelKind::Mesh(mesh) => {
                let Some(scale) = &panel.color_scale else { return };
                let (rows, cols) = mesh.z.dim();
                for i in 0..rows {
                    for j in 0..cols {
                        let z = mesh.z[[i, j]];
                        if !z.is_finite() {
                            continue;
                        }
                        let t = figure::color_position(scale, z) as f32;
                        let color = config.colormap.sample(t);
                        let corners = vec![
                            [mesh.x_edges[[i, j]], mesh.y_edges[[i, j]]],
                            [mesh.x_edges[[i, j + 1]], mesh.y_edges[[i, j + 1]]],
                            [mesh.x_edges[[i + 1, j + 1]], mesh.y_edges[[i + 1, j + 1]]],
                            [mesh.x_edges[[i + 1, j]], mesh.y_edges[[i + 1, j]]],
                        ];
                        plot_ui.polygon(
                            Polygon::new("", PlotPoints::from(corners))
                                .fill_color(color)
                                .stroke(egui::Stroke::NONE),
                        );
                    }
                }
            }
            PanelKind::Scatter(scatter) => {
                let Some(scale) = &panel.color_scale else {
                    return;
                };
                // Batch points into color buckets instead of one item each.
                let mut buckets: Vec<Vec<[f64; 2]>> = vec![Vec::new(); SCATTER_BUCKETS];
                for p in &scatter.points {
                    let t = figure::color_position(scale, p[2]);
                    if t.is_nan() {
                        continue;
                    }
                    let b = ((t * (SCATTER_BUCKETS - 1) as f64).round() as usize)
                        .min(SCATTER_BUCKETS - 1);
                    buckets[b].push([p[0], p[1]]);
                }
                for (b, pts) in buckets.into_iter().enumerate() {
                    if pts.is_empty() {
                        continue;
                    }
                    let t = b as f32 / (SCATTER_BUCKETS - 1) as f32;
                    plot_ui.points(
                        Points::new("", pts)
                            .radius(config.scatter_radius)
                            .color(config.colormap.sample(t)),
                    );
                }
            }
        });
    });

    if let (Some(cb_rect), Some(scale)) = (colorbar_rect, &panel.color_scale) {
        colorbar_ui(ui, config, cb_rect, scale);
    }
}

/// Paint a vertical colorbar strip with min/max ticks and a rotated label.
fn colorbar_ui(ui: &egui::Ui, config: &AutoPlotConfig, rect: egui::Rect, scale: &ColorScale) {
    let painter = ui.painter_at(rect);
    let strip = egui::Rect::from_min_max(
        rect.min,
        egui::pos2(rect.min.x + config.colorbar_width, rect.max.y),
    );

    let slice_h = strip.height() / COLORBAR_SLICES as f32;
    for s in 0..COLORBAR_SLICES {
        // Slice 0 at the bottom = minimum of the scale.
        let t = s as f32 / (COLORBAR_SLICES - 1) as f32;
        let y1 = strip.max.y - s as f32 * slice_h;
        let slice = egui::Rect::from_min_max(
            egui::pos2(strip.min.x, y1 - slice_h),
            egui::pos2(strip.max.x, y1),
        );
        painter.rect_filled(slice, 0.0, config.colormap.sample(t));
    }
    painter.rect_stroke(
        strip,
        0.0,
        ui.visuals().window_stroke(),
        egui::StrokeKind::Outside,
    );

    let font = egui::TextStyle::Small.resolve(ui.style());
    let text_color = ui.visuals().text_color();
    painter.text(
        egui::pos2(strip.max.x + 4.0, strip.min.y),
        egui::Align2::LEFT_TOP,
        format_tick(scale.max),
        font.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(strip.max.x + 4.0, strip.max.y),
        egui::Align2::LEFT_BOTTOM,
        format_tick(scale.min),
        font.clone(),
        text_color,
    );

    // Rotated quantity label along the strip.
    let galley = painter.layout_no_wrap(scale.label.clone(), font, text_color);
    let pos = egui::pos2(
        strip.max.x + 4.0,
        strip.center().y + galley.size().x / 2.0,
    );
    painter.add(
        egui::epaint::TextShape::new(pos, galley, text_color)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

/// Tick formatting: plain decimals in a comfortable range, scientific outside.
fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && (a >= 1e4 || a < 1e-3) {
        format!("{:.2e}", v)
    } else {
        format!("{:.3}", v)
    }
}
