//! Scattered (non-gridded) 2-D data: points colored by a dependent value.

use autoplot::{channel_autoplot, run_autoplot, DataLayout, DataSet};
use ndarray::Array1;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("autoplot=debug")),
        )
        .init();

    let (sink, rx) = channel_autoplot();

    // A spiral of sample positions with a radial dependent value; no thread,
    // one static dataset.
    let n = 400;
    let xs: Vec<f64> = (0..n)
        .map(|k| {
            let t = k as f64 / n as f64 * 12.0;
            t.cos() * t
        })
        .collect();
    let ys: Vec<f64> = (0..n)
        .map(|k| {
            let t = k as f64 / n as f64 * 12.0;
            t.sin() * t
        })
        .collect();
    let zs: Vec<f64> = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x * x + y * y).sqrt())
        .collect();

    let mut ds = DataSet::new(DataLayout::Columnar);
    ds.push_axis("x", Some("um"), Array1::from(xs).into_dyn())
        .push_axis("y", Some("um"), Array1::from(ys).into_dyn())
        .push_dependent("height", Some("nm"), Array1::from(zs).into_dyn(), &["x", "y"]);
    let _ = sink.set_data(ds);

    run_autoplot("AutoPlot – scattered points", rx)
}
