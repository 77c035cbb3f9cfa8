//! Minimal labeled dataset fed into the auto-plot widget.
//!
//! A `DataSet` is a flat collection of named numeric fields. Dependent fields
//! name the independent axes they were swept over; axis fields name none.
//! Two layouts exist:
//! - `Meshgrid`: every field carries a grid of the same shape (coordinates
//!   may be irregular, holes are NaN),
//! - `Columnar`: every field is a 1-D column of the same length (scattered
//!   points).

use ndarray::{ArrayD, IxDyn};

use crate::error::{AutoPlotError, Result};

/// How the field values of a dataset are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataLayout {
    /// Gridded sweep: all fields share one n-dimensional shape.
    Meshgrid,
    /// Scattered points: all fields are equal-length 1-D columns.
    Columnar,
}

/// A named numeric field with an optional unit.
#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub unit: Option<String>,
    pub values: ArrayD<f64>,
    /// Names of the independent axes this field depends on; empty for axes.
    pub axes: Vec<String>,
}

impl Field {
    /// Axis label in the form `"name (unit)"`, or the bare name without a unit.
    pub fn label(&self) -> String {
        match &self.unit {
            Some(u) if !u.is_empty() => format!("{} ({})", self.name, u),
            _ => self.name.clone(),
        }
    }
}

/// Labeled multi-dimensional dataset: axes plus dependent quantities.
#[derive(Clone, Debug)]
pub struct DataSet {
    layout: DataLayout,
    fields: Vec<Field>,
}

impl DataSet {
    pub fn new(layout: DataLayout) -> Self {
        Self {
            layout,
            fields: Vec::new(),
        }
    }

    pub fn layout(&self) -> DataLayout {
        self.layout
    }

    /// Add an independent axis field.
    pub fn push_axis(
        &mut self,
        name: impl Into<String>,
        unit: Option<&str>,
        values: ArrayD<f64>,
    ) -> &mut Self {
        self.fields.push(Field {
            name: name.into(),
            unit: unit.map(|u| u.to_string()),
            values,
            axes: Vec::new(),
        });
        self
    }

    /// Add a dependent field swept over the named axes.
    pub fn push_dependent(
        &mut self,
        name: impl Into<String>,
        unit: Option<&str>,
        values: ArrayD<f64>,
        axes: &[&str],
    ) -> &mut Self {
        self.fields.push(Field {
            name: name.into(),
            unit: unit.map(|u| u.to_string()),
            values,
            axes: axes.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field values by name.
    pub fn values(&self, name: &str) -> Result<&ArrayD<f64>> {
        self.field(name)
            .map(|f| &f.values)
            .ok_or_else(|| AutoPlotError::unknown_field(name))
    }

    /// Shape of the named field's values.
    pub fn shape(&self, name: &str) -> Result<Vec<usize>> {
        Ok(self.values(name)?.shape().to_vec())
    }

    /// Axis label for the named field (`"name (unit)"`).
    pub fn label(&self, name: &str) -> String {
        self.field(name)
            .map(|f| f.label())
            .unwrap_or_else(|| name.to_string())
    }

    /// Names of the independent axes, in first-seen order over the dependents.
    pub fn axes(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for f in &self.fields {
            for a in &f.axes {
                if !out.iter().any(|x| x == a) {
                    out.push(a.clone());
                }
            }
        }
        out
    }

    /// Names of the dependent fields (those that name at least one axis).
    pub fn dependents(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.axes.is_empty())
            .map(|f| f.name.clone())
            .collect()
    }

    /// Check internal consistency: referenced axes exist, and shapes agree
    /// with the layout.
    pub fn validate(&self) -> Result<()> {
        for f in &self.fields {
            for a in &f.axes {
                if self.field(a).is_none() {
                    return Err(AutoPlotError::unknown_axis(&f.name, a));
                }
            }
        }
        match self.layout {
            DataLayout::Meshgrid => {
                if let Some(first) = self.fields.first() {
                    let expected = first.values.shape().to_vec();
                    for f in &self.fields[1..] {
                        if f.values.shape() != expected.as_slice() {
                            return Err(AutoPlotError::ShapeMismatch {
                                field: f.name.clone(),
                                expected,
                                got: f.values.shape().to_vec(),
                            });
                        }
                    }
                    for f in &self.fields {
                        if !f.axes.is_empty() && f.axes.len() != f.values.ndim() {
                            return Err(AutoPlotError::RankMismatch {
                                dependent: f.name.clone(),
                                naxes: f.axes.len(),
                                rank: f.values.ndim(),
                            });
                        }
                    }
                }
            }
            DataLayout::Columnar => {
                if let Some(first) = self.fields.first() {
                    let len = first.values.len();
                    for f in &self.fields {
                        if f.values.ndim() != 1 || f.values.len() != len {
                            return Err(AutoPlotError::ShapeMismatch {
                                field: f.name.clone(),
                                expected: vec![len],
                                got: f.values.shape().to_vec(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Flatten a meshgrid dataset into scattered columns.
    ///
    /// Used when a 2-D grid is degenerate (fewer than two samples along one
    /// axis) and should be plotted as individual points instead of a mesh.
    /// A columnar dataset is returned unchanged.
    pub fn to_columnar(&self) -> Self {
        if self.layout == DataLayout::Columnar {
            return self.clone();
        }
        let fields = self
            .fields
            .iter()
            .map(|f| Field {
                name: f.name.clone(),
                unit: f.unit.clone(),
                values: ArrayD::from_shape_vec(
                    IxDyn(&[f.values.len()]),
                    f.values.iter().copied().collect(),
                )
                .unwrap_or_else(|_| ArrayD::zeros(IxDyn(&[0]))),
                axes: f.axes.clone(),
            })
            .collect();
        Self {
            layout: DataLayout::Columnar,
            fields,
        }
    }
}
