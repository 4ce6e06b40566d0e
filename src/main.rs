mod ui;
mod engine;
mod model;
use eframe;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_title("DareDash"),
        ..Default::default()
    };

    eframe::run_native(
        "DareDash",
        options,
        Box::new(|_cc| {
            let app = ui::app::DareDashApp::new()?;
            Ok(Box::new(app))
        }),
    )
}
