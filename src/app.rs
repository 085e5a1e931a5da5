use eframe::egui::{self, RichText, Ui};

use crate::color::{ACCENT, MUTED};
use crate::config::DashboardConfig;
use crate::state::{AppState, Dashboard, SignalReport};
use crate::ui::{cards, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ShadowNetworkApp {
    pub state: AppState,
}

impl ShadowNetworkApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for ShadowNetworkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: sync status ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: roulette ----
        egui::SidePanel::left("roulette_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, now);
            });

        if self.state.is_spinning() {
            ctx.request_repaint_after(self.state.config.spin_step());
        }

        // ---- Central panel: controls and report ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("SHADOW NETWORK: GLOBAL BIAS ENGINE").strong());
            ui.label(
                RichText::new("DEPLOYMENT MODE: Reading from static satellite data stream.")
                    .color(MUTED),
            );
            ui.add_space(8.0);
            panels::controls(ui, &mut self.state);
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| match &self.state.dashboard {
                    Dashboard::NoSignals => {
                        ui.add_space(24.0);
                        ui.label(
                            RichText::new("No signals detected in the static data file.")
                                .color(ACCENT),
                        );
                    }
                    Dashboard::Signals(report) => {
                        signal_report(ui, &self.state.target, report);
                    }
                });
        });
    }
}

fn signal_report(ui: &mut Ui, target: &str, report: &SignalReport) {
    ui.heading(format!("Media Bias Landscape: {}", target.to_uppercase()));
    ui.label(
        RichText::new(format!(
            "{} articles across {} ranked sources",
            report.filtered_count,
            report.rows.len()
        ))
        .color(MUTED),
    );
    table::bias_table(ui, &report.rows);

    ui.separator();
    ui.heading("SIGNAL ANALYTICS");
    ui.columns(2, |cols: &mut [Ui]| {
        plot::polarity_histogram(&mut cols[0], &report.histogram);
        plot::source_comparison(&mut cols[1], &report.chart_rows);
    });

    ui.separator();
    ui.heading("RECENT SIGNAL INTERCEPTS");
    cards::signal_cards(ui, &report.cards);
}
