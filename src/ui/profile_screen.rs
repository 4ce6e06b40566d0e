use eframe::egui;

use crate::engine::profile_store::ProfileRepository;
use crate::model::mood::{ChallengeType, Mood};
use crate::ui::app::{card, kind_color, AppState};

pub fn draw<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.heading("Profile");
    ui.separator();

    draw_username(ui, state);
    ui.add_space(12.0);
    draw_subscription(ui, state);
    ui.add_space(12.0);
    draw_custom_challenges(ui, state);
    ui.add_space(12.0);
    draw_saved_games(ui, state);
    ui.add_space(12.0);
    draw_generator_settings(ui, state);

    ui.add_space(12.0);
    if ui.button("⬅ Back").clicked() {
        state.go_home();
    }
}

fn draw_username<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.horizontal(|ui| {
        ui.label("Name");
        let response = ui.text_edit_singleline(&mut state.profile_form.username);
        if response.lost_focus() && !state.store.set_username(&state.profile_form.username) {
            state.profile_form.username = state.store.profile().username.clone();
        }
    });
}

fn draw_subscription<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    let premium = state.store.is_premium();
    let color = if premium {
        egui::Color32::from_rgb(110, 85, 20)
    } else {
        egui::Color32::from_gray(40)
    };

    let mut toggle = false;
    card(ui, color, |ui| {
        let status = if premium { "Pro Member" } else { "Free Plan" };
        ui.label(egui::RichText::new(status).size(20.0).strong().color(egui::Color32::WHITE));
        ui.label("✔ Spicy, Extreme & Awkward modes");
        ui.label("✔ No ads");
        ui.label("✔ Unlimited custom cards");
        ui.add_space(6.0);

        let label = if premium {
            "Cancel Premium"
        } else {
            "Upgrade to Pro - $4.99"
        };
        toggle = ui.button(label).clicked();
    });

    if toggle {
        state.store.toggle_premium();
    }
}

fn draw_custom_challenges<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.label(egui::RichText::new("My Custom Cards").size(18.0).strong());

    let form = &mut state.profile_form;
    ui.add(
        egui::TextEdit::multiline(&mut form.new_text)
            .hint_text("Write a custom truth or dare...")
            .desired_rows(2),
    );

    let mut add = false;
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("custom_kind")
            .selected_text(form.new_kind.label())
            .show_ui(ui, |ui| {
                for kind in ChallengeType::ALL {
                    ui.selectable_value(&mut form.new_kind, kind, kind.label());
                }
            });

        egui::ComboBox::from_id_salt("custom_mood")
            .selected_text(form.new_mood.label())
            .show_ui(ui, |ui| {
                for mood in Mood::CATALOG {
                    ui.selectable_value(&mut form.new_mood, mood, mood.label());
                }
            });

        let has_text = !form.new_text.trim().is_empty();
        add = ui.add_enabled(has_text, egui::Button::new("➕ Add")).clicked();
    });

    if add {
        let (text, kind, mood) = (form.new_text.clone(), form.new_kind, form.new_mood);
        if state.store.add_custom_challenge(&text, kind, mood).is_some() {
            state.profile_form.new_text.clear();
        }
    }

    ui.separator();

    let mut remove: Option<String> = None;
    if state.store.profile().saved_challenges.is_empty() {
        ui.label("No custom cards yet.");
    }
    for challenge in &state.store.profile().saved_challenges {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(challenge.kind.label())
                    .strong()
                    .background_color(kind_color(challenge.kind))
                    .color(egui::Color32::WHITE),
            );
            ui.label(egui::RichText::new(challenge.mood.label()).weak());
            ui.label(&challenge.text);
            if ui.small_button("❌").clicked() {
                remove = Some(challenge.id.clone());
            }
        });
    }

    if let Some(id) = remove {
        state.store.remove_custom_challenge(&id);
    }
}

fn draw_saved_games<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    let games = &state.store.profile().saved_games;
    let mut clear = false;

    ui.collapsing(format!("Past Games ({})", games.len()), |ui| {
        if games.is_empty() {
            ui.label("None");
            return;
        }

        for (i, game) in games.iter().enumerate() {
            let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
            ui.collapsing(
                format!("#{} · {} · {}", i + 1, game.selected_mood, names.join(", ")),
                |ui| {
                    for entry in &game.history {
                        ui.label(format!("• {} ({}): {}", entry.player, entry.kind, entry.text));
                    }
                },
            );
        }

        clear = ui.button("Clear history").clicked();
    });

    if clear {
        state.store.clear_saved_games();
    }
}

fn draw_generator_settings<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.collapsing("Generator Settings", |ui| {
        let draft = &mut state.profile_form.settings;

        ui.label("Endpoint");
        ui.text_edit_singleline(&mut draft.endpoint);
        ui.label("Model");
        ui.text_edit_singleline(&mut draft.model);
        ui.label("Temperature");
        ui.add(egui::Slider::new(&mut draft.temperature, 0.0..=2.0));
        ui.label("UI Scale");
        ui.add(egui::Slider::new(&mut draft.ui_scale, 0.75..=2.0));

        let changed = *draft != state.settings;
        ui.horizontal(|ui| {
            if ui.add_enabled(changed, egui::Button::new("💾 Save")).clicked() {
                state.save_settings_draft();
            }
            if ui.add_enabled(changed, egui::Button::new("Revert")).clicked() {
                state.profile_form.settings = state.settings.clone();
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Test connection").clicked() {
                state.test_connection();
            }
            if let Some(status) = &state.connection_status {
                ui.label(status);
            }
        });
    });
}
