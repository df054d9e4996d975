#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod refrigerant_picker;

use app::VaporcycleApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Vaporcycle"),
        ..Default::default()
    };

    eframe::run_native(
        "Vaporcycle",
        options,
        Box::new(|cc| Ok(Box::new(VaporcycleApp::new(cc)))),
    )
}
