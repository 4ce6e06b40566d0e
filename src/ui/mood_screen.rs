use eframe::egui;

use crate::engine::mood_select::is_locked;
use crate::engine::profile_store::ProfileRepository;
use crate::model::mood::Mood;
use crate::ui::app::{card, AppState};

fn mood_color(mood: Mood) -> egui::Color32 {
    match mood {
        Mood::Soft => egui::Color32::from_rgb(30, 90, 60),
        Mood::Funny => egui::Color32::from_rgb(120, 100, 20),
        Mood::Couples => egui::Color32::from_rgb(130, 50, 90),
        Mood::Spicy => egui::Color32::from_rgb(150, 70, 20),
        Mood::Extreme => egui::Color32::from_rgb(110, 20, 20),
        Mood::Awkward => egui::Color32::from_rgb(80, 50, 120),
    }
}

pub fn draw<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.heading("Choose the vibe");
    ui.label("Pick a mood for the cards.");
    ui.separator();

    let premium = state.store.is_premium();
    let mut picked: Option<Mood> = None;

    for mood in Mood::CATALOG {
        let locked = is_locked(mood, premium);
        let color = if locked {
            egui::Color32::from_gray(45)
        } else {
            mood_color(mood)
        };

        card(ui, color, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let title = if locked {
                        format!("🔒 {}", mood.label())
                    } else {
                        mood.label().to_string()
                    };
                    ui.label(egui::RichText::new(title).size(20.0).strong().color(egui::Color32::WHITE));
                    ui.label(egui::RichText::new(mood.description()).color(egui::Color32::LIGHT_GRAY));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if locked { "Unlock" } else { "Play" };
                    if ui.button(label).clicked() {
                        picked = Some(mood);
                    }
                });
            });
        });
        ui.add_space(6.0);
    }

    if let Some(mood) = picked {
        state.select_mood(mood);
    }
}
