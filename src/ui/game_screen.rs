use eframe::egui;

use crate::engine::profile_store::ProfileRepository;
use crate::engine::turn::TurnPhase;
use crate::model::mood::ChallengeType;
use crate::ui::app::{card, kind_color, AppState};

enum Action {
    Choose(ChallengeType),
    Reroll,
    Complete,
    Forfeit,
    Exit,
}

pub fn draw<R: ProfileRepository>(ui: &mut egui::Ui, state: &mut AppState<R>) {
    let Some(game) = state.game.as_ref() else {
        ui.label("No game in progress.");
        return;
    };

    let mut action: Option<Action> = None;

    // HUD
    ui.horizontal(|ui| {
        ui.label(format!("Round {}", game.round()));
        ui.label(egui::RichText::new(format!("{} Mode", game.mood())).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🏠 Exit").clicked() {
                action = Some(Action::Exit);
            }
        });
    });
    ui.separator();
    ui.add_space(16.0);

    match game.phase() {
        TurnPhase::AwaitingChoice | TurnPhase::Loading { .. } => {
            let loading = game.is_loading();

            ui.vertical_centered(|ui| {
                ui.label("It's your turn");
                ui.label(egui::RichText::new(&game.current_player().name).size(40.0).strong());
                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    for kind in ChallengeType::ALL {
                        let button = egui::Button::new(
                            egui::RichText::new(kind.label().to_uppercase())
                                .size(28.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(kind_color(kind))
                        .min_size(egui::vec2(180.0, 120.0));

                        if ui.add_enabled(!loading, button).clicked() {
                            action = Some(Action::Choose(kind));
                        }
                    }
                });

                if loading {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Consulting the oracle...");
                    });
                }
            });
        }

        TurnPhase::ShowingChallenge { kind, text } => {
            card(ui, kind_color(*kind), |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(kind.label().to_uppercase()).strong().color(egui::Color32::WHITE));
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(text).size(26.0).strong().color(egui::Color32::WHITE));
                });
            });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add_sized([260.0, 40.0], egui::Button::new("Completed 🏆"))
                    .clicked()
                {
                    action = Some(Action::Complete);
                }
                ui.horizontal(|ui| {
                    if ui.button("🔄 New card").clicked() {
                        action = Some(Action::Reroll);
                    }
                    if ui.button("Forfeit").clicked() {
                        action = Some(Action::Forfeit);
                    }
                });
            });
        }
    }

    match action {
        Some(Action::Choose(kind)) => state.choose(kind),
        Some(Action::Reroll) => state.reroll(),
        Some(Action::Complete) => state.complete_turn(),
        Some(Action::Forfeit) => state.forfeit_turn(),
        Some(Action::Exit) => state.exit_game(),
        None => {}
    }
}
