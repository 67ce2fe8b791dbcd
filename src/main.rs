// Birthday Tribute Application
// Main entry point

use birthday_tribute::ui::TributeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Birthday Tribute");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Birthday Tribute")
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "birthday-tribute",
        options,
        Box::new(|cc| Ok(Box::new(TributeApp::new(cc)))),
    )
}
