//! Channel for feeding datasets into the widget from a producer thread.
//!
//! A measurement loop (or a processing node in a larger pipeline) holds the
//! `AutoPlotSink` and pushes complete datasets; the widget drains the
//! receiver during its paint cycle and replots.

use std::sync::mpsc::{Receiver, Sender};

use crate::data::DataSet;

/// Messages sent over the channel to drive the widget.
pub enum PlotCommand {
    /// Replace the displayed dataset.
    SetData(DataSet),
    /// Clear the figure.
    Clear,
}

/// Convenience sender for feeding datasets into the auto-plot widget.
#[derive(Clone)]
pub struct AutoPlotSink {
    tx: Sender<PlotCommand>,
}

impl AutoPlotSink {
    /// Send a dataset to be plotted, replacing whatever is shown.
    pub fn set_data(
        &self,
        data: DataSet,
    ) -> Result<(), std::sync::mpsc::SendError<PlotCommand>> {
        self.tx.send(PlotCommand::SetData(data))
    }

    /// Clear the figure.
    pub fn clear(&self) -> Result<(), std::sync::mpsc::SendError<PlotCommand>> {
        self.tx.send(PlotCommand::Clear)
    }
}

/// Create a new channel pair: `(AutoPlotSink, Receiver<PlotCommand>)`.
pub fn channel_autoplot() -> (AutoPlotSink, Receiver<PlotCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (AutoPlotSink { tx }, rx)
}
