use eframe::egui::{self, RichText, Stroke, Ui};

use crate::color::{ACCENT, CYAN, ERROR, MUTED};
use crate::data::aggregate::SortOrder;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – roulette
// ---------------------------------------------------------------------------

/// Render the roulette sidebar. `now` is the frame time in seconds.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, now: f64) {
    ui.add_space(8.0);
    ui.heading(RichText::new("GLOBAL ROULETTE").color(CYAN).strong());
    ui.separator();

    let shown = state.advance_spin(now);

    egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.0, CYAN))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(shown.to_uppercase())
                        .monospace()
                        .strong()
                        .size(18.0)
                        .color(CYAN),
                );
            });
        });
    ui.add_space(8.0);

    let button = egui::Button::new(RichText::new("SPIN WHEEL").strong())
        .min_size(egui::vec2(ui.available_width(), 28.0));
    if ui.add_enabled(!state.is_spinning(), button).clicked() {
        state.start_spin(now, &mut rand::rng());
    }

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!("{} locations in rotation", state.country_pool().len()))
            .small()
            .color(MUTED),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} articles loaded from {}",
            state.dataset.table.len(),
            state.dataset.path.display()
        ));

        if let Some(msg) = state.status_message() {
            ui.separator();
            ui.label(RichText::new(msg).color(ERROR));
        }
    });
}

// ---------------------------------------------------------------------------
// Search / sort controls
// ---------------------------------------------------------------------------

/// Target country text field and sort order selector.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("ENTER TARGET COUNTRY:").strong());
        let mut target = state.target.clone();
        let edit = egui::TextEdit::singleline(&mut target).desired_width(260.0);
        if ui.add(edit).changed() {
            state.set_target(target);
        }

        ui.add_space(24.0);

        ui.label(RichText::new("PRIORITY FILTER:").strong());
        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(state.sort_order.label())
            .show_ui(ui, |ui: &mut Ui| {
                for order in SortOrder::ALL {
                    if ui
                        .selectable_label(state.sort_order == order, order.label())
                        .clicked()
                    {
                        state.set_sort_order(order);
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        let text = if state.dataset.is_ok() {
            "DATABASE SYNC: STABLE"
        } else {
            "DATABASE SYNC: OFFLINE"
        };
        ui.label(RichText::new(text).monospace().color(ACCENT));
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open article data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
