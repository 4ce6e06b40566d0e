use eframe::egui;

use crate::engine::profile_store::ProfileRepository;
use crate::ui::app::AppState;

pub fn draw<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Truth or Dare").size(36.0).strong());
        ui.label(format!("Welcome back, {}", state.store.profile().username));
        ui.add_space(24.0);

        if ui
            .add_sized([220.0, 44.0], egui::Button::new("Start Game"))
            .clicked()
        {
            state.start_setup();
        }

        ui.add_space(8.0);

        if ui
            .add_sized([220.0, 32.0], egui::Button::new("My Profile"))
            .clicked()
        {
            state.open_profile();
        }
    });
}
