use eframe::egui;

use crate::engine::profile_store::ProfileRepository;
use crate::model::player::{Gender, PlayerId, PlayerUpdate};
use crate::ui::app::AppState;

pub fn draw<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    ui.heading("Who's playing?");
    ui.label("Add at least two players.");
    ui.separator();

    let mut updates: Vec<(PlayerId, PlayerUpdate)> = Vec::new();
    let mut remove: Option<PlayerId> = None;
    let can_remove = state.roster.can_remove();

    for (index, player) in state.roster.players().iter().enumerate() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}", index + 1));

                let mut name = player.name.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut name).hint_text("Name"))
                    .changed()
                {
                    updates.push((player.id, PlayerUpdate::Name(name)));
                }

                ui.label("Age");
                let mut age = player.age;
                if ui.add(egui::DragValue::new(&mut age).range(0..=99)).changed() {
                    updates.push((player.id, PlayerUpdate::Age(age)));
                }

                let mut gender = player.gender;
                egui::ComboBox::from_id_salt(("gender", player.id))
                    .selected_text(gender.label())
                    .show_ui(ui, |ui| {
                        for option in Gender::ALL {
                            ui.selectable_value(&mut gender, option, option.label());
                        }
                    });
                if gender != player.gender {
                    updates.push((player.id, PlayerUpdate::Gender(gender)));
                }

                if can_remove && ui.small_button("🗑").clicked() {
                    remove = Some(player.id);
                }
            });
        });
        ui.add_space(4.0);
    }

    for (id, update) in updates {
        state.roster.update(id, update);
    }
    if let Some(id) = remove {
        state.roster.remove_player(id);
    }

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("➕ Add Player").clicked() {
            state.roster.add_player();
        }

        let ready = state.roster.is_valid();
        if ui
            .add_enabled(ready, egui::Button::new("Start Game ▶"))
            .clicked()
        {
            state.submit_roster();
        }
    });
}
