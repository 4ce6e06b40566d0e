use eframe::egui;

use crate::engine::profile_store::ProfileRepository;
use crate::ui::app::AppState;

/// Simulated one-time purchase. No payment is processed.
pub fn draw<R: ProfileRepository>(ctx: &egui::Context, state: &mut AppState<R>) {
    if !state.show_premium_modal {
        return;
    }

    let mut upgrade = false;
    let mut close = false;

    let modal = egui::Modal::new(egui::Id::new("premium_modal")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("⭐ Unlock Spicy Mode").size(22.0).strong());
            ui.label("Get access to the hottest dares, extreme questions, and awkward cards.");
        });
        ui.add_space(8.0);
        ui.label("✔ Unlock Spicy, Extreme & Awkward decks");
        ui.label("✔ Ad-free experience");
        ui.label("✔ Unlimited custom cards");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Unlock Now - $4.99").clicked() {
                upgrade = true;
            }
            if ui.button("Not now").clicked() {
                close = true;
            }
        });
    });

    if upgrade {
        state.confirm_upgrade();
    } else if close || modal.should_close() {
        state.show_premium_modal = false;
    }
}
