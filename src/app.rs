//! Standalone runner: an eframe window wrapping a single `AutoPlot` widget.
//!
//! Embedding the widget in an existing egui application does not need this
//! module; construct [`AutoPlot`] directly and call `ui` from your panel.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::config::AutoPlotConfig;
use crate::sink::PlotCommand;
use crate::widget::AutoPlot;

/// Repaint interval while waiting for data from a sink.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// eframe application hosting one auto-plot widget in the central panel.
pub struct AutoPlotApp {
    plot: AutoPlot,
}

impl AutoPlotApp {
    pub fn new(cc: &eframe::CreationContext<'_>, plot: AutoPlot) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        Self { plot }
    }

    pub fn plot_mut(&mut self) -> &mut AutoPlot {
        &mut self.plot
    }
}

impl eframe::App for AutoPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.ui(ui);
        });
        // Keep polling the sink even when no input events arrive.
        if self.plot.has_receiver() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

/// Open a native window plotting whatever arrives on `rx`.
pub fn run_autoplot(title: impl Into<String>, rx: Receiver<PlotCommand>) -> eframe::Result<()> {
    let config = AutoPlotConfig {
        title: title.into(),
        ..Default::default()
    };
    run_autoplot_with_config(config, rx)
}

/// Like [`run_autoplot`] but with full control over the configuration.
pub fn run_autoplot_with_config(
    config: AutoPlotConfig,
    rx: Receiver<PlotCommand>,
) -> eframe::Result<()> {
    let native_options = config.native_options.clone().unwrap_or_else(|| {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]),
            ..Default::default()
        }
    });
    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let widget = AutoPlot::with_config(config).with_receiver(rx);
            Ok(Box::new(AutoPlotApp::new(cc, widget)))
        }),
    )
}
