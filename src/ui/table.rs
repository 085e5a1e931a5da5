use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::AggregateRow;

/// Ranked per-source table: CHANNEL, ANALYSIS, Articles.
pub fn bias_table(ui: &mut Ui, rows: &[AggregateRow]) {
    ui.push_id("bias_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(32.0))
            .column(Column::initial(260.0).at_least(120.0).clip(true))
            .column(Column::initial(200.0).at_least(140.0))
            .column(Column::remainder())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("CHANNEL");
                });
                header.col(|ui| {
                    ui.strong("ANALYSIS");
                });
                header.col(|ui| {
                    ui.strong("Articles");
                });
            })
            .body(|mut body| {
                for (rank, row) in rows.iter().enumerate() {
                    body.row(20.0, |mut tr| {
                        tr.col(|ui| {
                            ui.label((rank + 1).to_string());
                        });
                        tr.col(|ui| {
                            ui.label(RichText::new(&row.channel).monospace())
                                .on_hover_text(row.source_url.as_deref().unwrap_or("(no url)"));
                        });
                        tr.col(|ui| {
                            ui.label(RichText::new(row.label.as_str()).color(row.label.color()));
                        });
                        tr.col(|ui| {
                            ui.label(row.article_count.to_string());
                        });
                    });
                }
            });
    });
}
