//! Subplot grid sizing and rect splitting.

use crate::error::{AutoPlotError, Result};

/// A rows x columns subplot grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl GridSpec {
    /// Grid heuristic for `n` panels: rows is the integer part of sqrt(n)
    /// (at least 1), columns whatever is needed to fit the rest. Keeps the
    /// grid close to square with at most one partially-filled row.
    pub fn for_panels(n: usize) -> Self {
        if n == 0 {
            return Self { rows: 1, cols: 1 };
        }
        let rows = ((n as f64).sqrt().floor() as usize).max(1);
        let cols = n.div_ceil(rows);
        Self { rows, cols }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Fail when more panels are requested than the grid holds.
    pub fn check(&self, panels: usize) -> Result<()> {
        if panels > self.capacity() {
            return Err(AutoPlotError::GridOverflow {
                panels,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Split `rect` into the grid's cells, row-major, with fixed spacing
    /// between cells.
    pub fn cell_rects(&self, rect: egui::Rect, spacing: f32) -> Vec<egui::Rect> {
        let rows = self.rows as f32;
        let cols = self.cols as f32;
        let w = ((rect.width() - spacing * (cols - 1.0)) / cols).max(0.0);
        let h = ((rect.height() - spacing * (rows - 1.0)) / rows).max(0.0);
        let mut out = Vec::with_capacity(self.capacity());
        for r in 0..self.rows {
            for c in 0..self.cols {
                let min = egui::pos2(
                    rect.min.x + c as f32 * (w + spacing),
                    rect.min.y + r as f32 * (h + spacing),
                );
                out.push(egui::Rect::from_min_size(min, egui::vec2(w, h)));
            }
        }
        out
    }
}
