use eframe::egui;

mod app;
mod logging;

fn main() -> Result<(), eframe::Error> {
    logging::set_up();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bank Account Manager",
        options,
        Box::new(|cc| Box::new(app::App::new(cc))),
    )
}
