//! Simulated 2-D measurement sweep, filled in row by row.
//!
//! Shows the pseudocolor path: while the sweep is incomplete the coordinate
//! grids contain NaN rows, which the widget interpolates/crops so a mesh can
//! be drawn from the very first rows.

use std::time::Duration;

use autoplot::{channel_autoplot, run_autoplot, DataLayout, DataSet};
use ndarray::Array2;

const ROWS: usize = 24;
const COLS: usize = 32;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("autoplot=debug")),
        )
        .init();

    let (sink, rx) = channel_autoplot();

    std::thread::spawn(move || {
        for filled in 1..=ROWS {
            let nan_past = |i: usize, v: f64| if i < filled { v } else { f64::NAN };
            let x = Array2::from_shape_fn((ROWS, COLS), |(i, _)| nan_past(i, i as f64 * 0.1));
            let y = Array2::from_shape_fn((ROWS, COLS), |(i, j)| nan_past(i, j as f64 * 0.25));
            let z = Array2::from_shape_fn((ROWS, COLS), |(i, j)| {
                let (xv, yv) = (i as f64 * 0.1, j as f64 * 0.25);
                nan_past(i, (xv * 4.0).sin() * (yv * 1.5).cos())
            });

            let mut ds = DataSet::new(DataLayout::Meshgrid);
            ds.push_axis("gate", Some("V"), x.into_dyn())
                .push_axis("bias", Some("mV"), y.into_dyn())
                .push_dependent("conductance", Some("e²/h"), z.into_dyn(), &["gate", "bias"]);

            if sink.set_data(ds).is_err() {
                break; // window closed
            }
            std::thread::sleep(Duration::from_millis(250));
        }
    });

    run_autoplot("AutoPlot – 2D sweep", rx)
}
