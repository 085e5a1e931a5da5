use eframe::egui::{self, RichText, Stroke, Ui};

use crate::color::MUTED;
use crate::data::sampler::SignalCard;

const GRID_COLUMNS: usize = 3;

/// Grid of sampled article cards, three per row.
pub fn signal_cards(ui: &mut Ui, cards: &[SignalCard]) {
    for chunk in cards.chunks(GRID_COLUMNS) {
        ui.columns(GRID_COLUMNS, |cols: &mut [Ui]| {
            for (ui, card) in cols.iter_mut().zip(chunk) {
                card_frame(ui, card);
            }
        });
        ui.add_space(8.0);
    }
}

fn card_frame(ui: &mut Ui, card: &SignalCard) {
    let color = card.band.color();
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(2.0, color))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.channel).strong().size(15.0));
            ui.label(RichText::new(card.score_text()).color(color).strong());
            ui.add_space(4.0);
            match &card.source_url {
                Some(url) => {
                    ui.hyperlink_to("DECRYPT", url);
                }
                None => {
                    ui.label(RichText::new("no link").color(MUTED));
                }
            }
        });
}
