use autoplot::figure::PanelKind;
use autoplot::{channel_autoplot, AutoPlot, AutoPlotError, DataLayout, DataSet, PlotCommand};
use ndarray::Array1;

fn col(values: &[f64]) -> ndarray::ArrayD<f64> {
    Array1::from(values.to_vec()).into_dyn()
}

fn one_axis_sweep() -> DataSet {
    let mut ds = DataSet::new(DataLayout::Meshgrid);
    ds.push_axis("bias", Some("V"), col(&[0.0, 0.5, 1.0]))
        .push_dependent("current", Some("A"), col(&[0.1, 0.2, 0.3]), &["bias"]);
    ds
}

fn three_axis_sweep() -> DataSet {
    let mut ds = DataSet::new(DataLayout::Columnar);
    ds.push_axis("x", None, col(&[0.0]))
        .push_axis("y", None, col(&[0.0]))
        .push_axis("w", None, col(&[0.0]))
        .push_dependent("z", None, col(&[0.0]), &["x", "y", "w"]);
    ds
}

#[test]
fn set_data_builds_a_figure() {
    let mut plot = AutoPlot::new();
    assert!(plot.figure().is_empty());
    plot.set_data(&one_axis_sweep()).unwrap();
    assert_eq!(plot.figure().panels.len(), 1);
    assert!(matches!(plot.figure().panels[0].kind, PanelKind::Lines(_)));
}

#[test]
fn failed_set_data_keeps_previous_figure() {
    let mut plot = AutoPlot::new();
    plot.set_data(&one_axis_sweep()).unwrap();

    // A dataset the widget cannot plot must surface the error and leave the
    // earlier figure on screen.
    match plot.set_data(&three_axis_sweep()) {
        Err(AutoPlotError::TooManyAxes { axes }) => assert_eq!(axes.len(), 3),
        _ => panic!("expected TooManyAxes"),
    }
    assert_eq!(plot.figure().panels.len(), 1);
    assert_eq!(plot.figure().panels[0].x_label, "bias (V)");
}

#[test]
fn clear_empties_the_figure() {
    let mut plot = AutoPlot::new();
    plot.set_data(&one_axis_sweep()).unwrap();
    plot.clear();
    assert!(plot.figure().is_empty());
}

#[test]
fn sink_delivers_commands_in_order() {
    let (sink, rx) = channel_autoplot();
    sink.set_data(one_axis_sweep()).unwrap();
    sink.clear().unwrap();

    match rx.try_recv() {
        Ok(PlotCommand::SetData(ds)) => {
            assert_eq!(ds.dependents(), vec!["current"]);
        }
        _ => panic!("expected SetData first"),
    }
    assert!(matches!(rx.try_recv(), Ok(PlotCommand::Clear)));
    assert!(rx.try_recv().is_err(), "channel should be drained");
}

#[test]
fn sink_rejects_sends_after_receiver_drop() {
    let (sink, rx) = channel_autoplot();
    drop(rx);
    assert!(sink.set_data(one_axis_sweep()).is_err());
}
