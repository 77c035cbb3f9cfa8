//! autoplot: automatic plotting of measurement sweeps in an egui panel.
//!
//! Give the widget a labeled dataset (1-D or 2-D sweep, gridded or
//! scattered); it infers the independent axes and dependent quantities and
//! picks a plotting strategy by itself:
//! - one axis: line plot (gridded) or scatter (scattered), all dependents as
//!   traces in one panel;
//! - two axes: one panel per dependent on a near-square grid, as a
//!   pseudocolor mesh (gridded, with hole interpolation and cropping of
//!   invalid regions) or a colored scatter (scattered);
//! - more than two axes: rejected.
//!
//! Modules:
//! - `data`: the minimal labeled dataset container
//! - `num`: mesh edges, hole interpolation, invalid-region cropping
//! - `figure`: strategy selection, GUI-free and testable
//! - `widget`: the embeddable egui panel
//! - `sink`: channel for feeding datasets from a producer thread
//! - `app`: standalone eframe window runner

pub mod app;
pub mod colormap;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod layout;
pub mod num;
pub mod sink;
pub mod widget;

// Public re-exports for a compact external API
pub use app::{run_autoplot, run_autoplot_with_config, AutoPlotApp};
pub use colormap::Colormap;
pub use config::AutoPlotConfig;
pub use data::{DataLayout, DataSet, Field};
pub use error::{AutoPlotError, Result};
pub use figure::{build_figure, Figure, Panel, PanelKind};
pub use layout::GridSpec;
pub use sink::{channel_autoplot, AutoPlotSink, PlotCommand};
pub use widget::AutoPlot;
