//! Figure assembly: data-shape inference and plotting-strategy selection.
//!
//! `build_figure` inspects a dataset's axes and dependents and produces a
//! fully prepared, GUI-free description of what to draw: line panels for one
//! independent axis, pseudocolor meshes or colored scatters for two. The
//! widget only walks the result; all numeric work happens here, once per
//! `set_data` rather than once per frame.

use ndarray::{Array2, Ix2};
use tracing::debug;

use crate::colormap;
use crate::config::AutoPlotConfig;
use crate::data::{DataLayout, DataSet};
use crate::error::{AutoPlotError, Result};
use crate::layout::GridSpec;
use crate::num;

/// A single 1-D trace: one dependent against the shared axis.
#[derive(Clone, Debug)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    /// Gridded sweeps draw a connecting line; scattered data markers only.
    pub with_line: bool,
}

/// A prepared pseudocolor mesh: edge grids plus the cell values.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Cell corner x coordinates, shape (rows + 1, cols + 1).
    pub x_edges: Array2<f64>,
    /// Cell corner y coordinates, shape (rows + 1, cols + 1).
    pub y_edges: Array2<f64>,
    /// Cell values, shape (rows, cols); NaN cells are not drawn.
    pub z: Array2<f64>,
}

/// Scattered points colored by a third value.
#[derive(Clone, Debug)]
pub struct Scatter {
    /// (x, y, z) triples; z drives the color.
    pub points: Vec<[f64; 3]>,
}

/// What a single subplot draws.
#[derive(Clone, Debug)]
pub enum PanelKind {
    /// Nothing to draw (labels may still be shown).
    Empty,
    /// One-axis data: a set of traces sharing the x axis.
    Lines(Vec<Trace>),
    /// Two-axis gridded data.
    Mesh(Mesh),
    /// Two-axis scattered data, or the degenerate-mesh fallback.
    Scatter(Scatter),
}

/// Value range and label backing a panel's colorbar.
#[derive(Clone, Debug)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

/// One subplot of a figure.
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub kind: PanelKind,
    /// Present for two-axis panels; drives the colorbar strip.
    pub color_scale: Option<ColorScale>,
}

/// A prepared figure: subplot grid plus the panels that fill it.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub grid: Option<GridSpec>,
    pub panels: Vec<Panel>,
}

impl Figure {
    fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The subplot grid, sized for the panels if none was stored.
    pub fn grid_spec(&self) -> GridSpec {
        self.grid
            .unwrap_or_else(|| GridSpec::for_panels(self.panels.len()))
    }
}

/// Inspect the dataset and build the figure to draw.
///
/// Strategy selection:
/// - no axes or no dependents, or an empty shape: empty figure;
/// - one axis: a single panel with one trace per dependent;
/// - two axes: one panel per dependent on a near-square grid, pseudocolor
///   mesh for gridded data and colored scatter for scattered data;
/// - more than two axes: an error, auto-plotting rejects this.
pub fn build_figure(data: &DataSet, config: &AutoPlotConfig) -> Result<Figure> {
    data.validate()?;

    let axes = data.axes();
    let dependents = data.dependents();
    if axes.is_empty() || dependents.is_empty() {
        return Ok(Figure::empty());
    }

    let shape = data.shape(&dependents[0])?;
    if shape.contains(&0) {
        return Ok(Figure::empty());
    }

    // A 2-D grid with fewer than two samples along one axis cannot form
    // mesh cells; plot the individual points instead.
    let flattened;
    let data = if axes.len() == 2
        && data.layout() == DataLayout::Meshgrid
        && shape.iter().copied().min().unwrap_or(0) < 2
    {
        debug!(?shape, "degenerate 2-D grid, falling back to scattered points");
        flattened = data.to_columnar();
        &flattened
    } else {
        data
    };

    match axes.len() {
        1 => {
            let panel = build_1d_panel(data, &axes[0], &dependents, config)?;
            Ok(Figure {
                grid: Some(GridSpec { rows: 1, cols: 1 }),
                panels: vec![panel],
            })
        }
        2 => {
            let grid = GridSpec::for_panels(dependents.len());
            grid.check(dependents.len())?;
            let mut panels = Vec::with_capacity(dependents.len());
            for dep in &dependents {
                panels.push(build_2d_panel(data, &axes[0], &axes[1], dep)?);
            }
            Ok(Figure {
                grid: Some(grid),
                panels,
            })
        }
        _ => Err(AutoPlotError::TooManyAxes { axes }),
    }
}

/// One panel holding every dependent as a trace over the shared axis.
fn build_1d_panel(
    data: &DataSet,
    axis: &str,
    dependents: &[String],
    config: &AutoPlotConfig,
) -> Result<Panel> {
    let x = data.values(axis)?;
    let with_line = data.layout() == DataLayout::Meshgrid;

    let mut traces = Vec::with_capacity(dependents.len());
    for dep in dependents {
        let y = data.values(dep)?;
        let points = x
            .iter()
            .zip(y.iter())
            .filter(|(xv, yv)| xv.is_finite() && yv.is_finite())
            .map(|(xv, yv)| [*xv, *yv])
            .collect();
        traces.push(Trace {
            name: dep.clone(),
            points,
            with_line,
        });
    }

    // Shared y label: join at most `max_y_labels` dependent labels, then
    // truncate with a marker.
    let mut y_label = dependents
        .iter()
        .take(config.max_y_labels)
        .map(|d| data.label(d))
        .collect::<Vec<_>>()
        .join("; ");
    if dependents.len() > config.max_y_labels {
        y_label.push_str("; [...]");
    }

    Ok(Panel {
        title: None,
        x_label: data.label(axis),
        y_label,
        kind: PanelKind::Lines(traces),
        color_scale: None,
    })
}

/// One panel for a single dependent over two axes.
fn build_2d_panel(data: &DataSet, x_name: &str, y_name: &str, dep: &str) -> Result<Panel> {
    let kind = match data.layout() {
        DataLayout::Meshgrid => {
            let x = as_grid(data, x_name)?;
            let y = as_grid(data, y_name)?;
            let z = as_grid(data, dep)?;
            prepare_mesh(&x, &y, &z, dep)
        }
        DataLayout::Columnar => {
            let x = data.values(x_name)?;
            let y = data.values(y_name)?;
            let z = data.values(dep)?;
            let points = x
                .iter()
                .zip(y.iter())
                .zip(z.iter())
                .filter(|((xv, yv), _)| xv.is_finite() && yv.is_finite())
                .map(|((xv, yv), zv)| [*xv, *yv, *zv])
                .collect();
            PanelKind::Scatter(Scatter { points })
        }
    };

    let color_scale = color_scale_of(&kind, data.label(dep));
    Ok(Panel {
        title: Some(dep.to_string()),
        x_label: data.label(x_name),
        y_label: data.label(y_name),
        kind,
        color_scale,
    })
}

/// The pseudocolor pipeline: interpolate coordinate holes, crop invalid
/// regions, then convert centers to edges. Falls back to a scatter when the
/// surviving grid is too small for mesh cells, and to an empty panel when
/// the coordinates are unusable.
fn prepare_mesh(x: &Array2<f64>, y: &Array2<f64>, z: &Array2<f64>, dep: &str) -> PanelKind {
    if num::all_invalid(x) || num::all_invalid(y) {
        debug!(dependent = dep, "coordinate grid entirely invalid, skipping mesh");
        return PanelKind::Empty;
    }

    // Only NaN holes are interpolated; infinite coordinates fall through to
    // the crop below.
    let (x, y) = if num::any_nan(x) || num::any_nan(y) {
        debug!(dependent = dep, "interpolating holes in coordinate grids");
        num::interp_meshgrid_2d(x, y)
    } else {
        (x.clone(), y.clone())
    };

    let (x, y, z) = if num::any_invalid(&x) || num::any_invalid(&y) {
        let cropped = num::crop2d(&x, &y, z);
        debug!(dependent = dep, shape = ?cropped.0.dim(), "cropped invalid mesh region");
        cropped
    } else {
        (x, y, z.clone())
    };

    if x.is_empty() {
        return PanelKind::Empty;
    }
    let (r, c) = x.dim();
    if r.min(c) < 2 {
        // Not enough samples for cells; show the surviving points.
        let points = x
            .iter()
            .zip(y.iter())
            .zip(z.iter())
            .map(|((xv, yv), zv)| [*xv, *yv, *zv])
            .collect();
        return PanelKind::Scatter(Scatter { points });
    }

    let x_edges = match num::centers_to_edges_2d(&x) {
        Ok(e) => e,
        Err(err) => {
            debug!(dependent = dep, %err, "skipping mesh");
            return PanelKind::Empty;
        }
    };
    let y_edges = match num::centers_to_edges_2d(&y) {
        Ok(e) => e,
        Err(err) => {
            debug!(dependent = dep, %err, "skipping mesh");
            return PanelKind::Empty;
        }
    };

    PanelKind::Mesh(Mesh {
        x_edges,
        y_edges,
        z,
    })
}

/// Finite min/max of the panel's z values; `None` for panels without one.
fn color_scale_of(kind: &PanelKind, label: String) -> Option<ColorScale> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    let mut visit = |v: f64| {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    };
    match kind {
        PanelKind::Mesh(m) => m.z.iter().copied().for_each(&mut visit),
        PanelKind::Scatter(s) => s.points.iter().map(|p| p[2]).for_each(&mut visit),
        PanelKind::Empty | PanelKind::Lines(_) => return None,
    }
    if !any {
        return None;
    }
    Some(ColorScale { min, max, label })
}

/// Normalized color position of a z value within a panel's color scale.
pub fn color_position(scale: &ColorScale, v: f64) -> f64 {
    colormap::normalize(v, scale.min, scale.max)
}

fn as_grid(data: &DataSet, name: &str) -> Result<Array2<f64>> {
    let values = data.values(name)?;
    values
        .clone()
        .into_dimensionality::<Ix2>()
        .map_err(|_| AutoPlotError::RankMismatch {
            dependent: name.to_string(),
            naxes: 2,
            rank: values.ndim(),
        })
}
