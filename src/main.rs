use std::path::Path;

use eframe::egui;
use shadow_network::app::ShadowNetworkApp;
use shadow_network::config::{CONFIG_FILE, DashboardConfig};

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SHADOW NETWORK | LIVE",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ShadowNetworkApp::new(config)))
        }),
    )
}
