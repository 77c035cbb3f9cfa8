use autoplot::{AutoPlotError, DataLayout, DataSet};
use ndarray::{Array1, Array2};

fn col(values: &[f64]) -> ndarray::ArrayD<f64> {
    Array1::from(values.to_vec()).into_dyn()
}

fn grid(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> ndarray::ArrayD<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| f(i, j)).into_dyn()
}

#[test]
fn axes_and_dependents_bookkeeping() {
    let mut ds = DataSet::new(DataLayout::Columnar);
    ds.push_axis("x", Some("V"), col(&[0.0, 1.0]))
        .push_dependent("a", Some("A"), col(&[1.0, 2.0]), &["x"])
        .push_dependent("b", None, col(&[3.0, 4.0]), &["x"]);

    assert_eq!(ds.axes(), vec!["x"]);
    assert_eq!(ds.dependents(), vec!["a", "b"]);
    assert_eq!(ds.label("x"), "x (V)");
    assert_eq!(ds.label("b"), "b");
    assert!(ds.validate().is_ok());
}

#[test]
fn axis_order_follows_dependents() {
    let mut ds = DataSet::new(DataLayout::Meshgrid);
    ds.push_axis("y", None, grid(2, 2, |_, j| j as f64))
        .push_axis("x", None, grid(2, 2, |i, _| i as f64))
        .push_dependent("z", None, grid(2, 2, |i, j| (i + j) as f64), &["x", "y"]);
    // "x" comes first because the dependent lists it first, regardless of
    // field insertion order.
    assert_eq!(ds.axes(), vec!["x", "y"]);
}

#[test]
fn validate_rejects_unknown_axis() {
    let mut ds = DataSet::new(DataLayout::Columnar);
    ds.push_dependent("a", None, col(&[1.0]), &["missing"]);
    match ds.validate() {
        Err(AutoPlotError::UnknownAxis { dependent, axis }) => {
            assert_eq!(dependent, "a");
            assert_eq!(axis, "missing");
        }
        other => panic!("expected UnknownAxis, got {other:?}"),
    }
}

#[test]
fn validate_rejects_shape_mismatch() {
    let mut ds = DataSet::new(DataLayout::Meshgrid);
    ds.push_axis("x", None, grid(2, 3, |i, _| i as f64))
        .push_dependent("z", None, grid(3, 2, |_, _| 0.0), &["x", "x2"])
        .push_axis("x2", None, grid(2, 3, |_, j| j as f64));
    assert!(matches!(
        ds.validate(),
        Err(AutoPlotError::ShapeMismatch { .. })
    ));
}

#[test]
fn validate_rejects_rank_mismatch() {
    let mut ds = DataSet::new(DataLayout::Meshgrid);
    ds.push_axis("x", None, col(&[0.0, 1.0]))
        .push_dependent("z", None, col(&[1.0, 2.0]), &["x", "x"]);
    assert!(matches!(
        ds.validate(),
        Err(AutoPlotError::RankMismatch { .. })
    ));
}

#[test]
fn to_columnar_flattens_grids() {
    let mut ds = DataSet::new(DataLayout::Meshgrid);
    ds.push_axis("x", None, grid(2, 3, |i, _| i as f64))
        .push_axis("y", None, grid(2, 3, |_, j| j as f64))
        .push_dependent("z", None, grid(2, 3, |i, j| (i * 3 + j) as f64), &["x", "y"]);

    let flat = ds.to_columnar();
    assert_eq!(flat.layout(), DataLayout::Columnar);
    assert_eq!(flat.shape("z").unwrap(), vec![6]);
    // Dependent still names both axes after flattening.
    assert_eq!(flat.axes(), vec!["x", "y"]);
    let z = flat.values("z").unwrap();
    assert_eq!(z.iter().copied().collect::<Vec<_>>(), vec![
        0.0, 1.0, 2.0, 3.0, 4.0, 5.0
    ]);
}

#[test]
fn unknown_field_lookup_fails() {
    let ds = DataSet::new(DataLayout::Columnar);
    assert!(matches!(
        ds.values("nope"),
        Err(AutoPlotError::UnknownField { .. })
    ));
}
