use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;

use crate::engine::engine::Engine;
use crate::engine::llm_client::FALLBACK_CHALLENGE;
use crate::engine::mood_select::{select, MoodSelection};
use crate::engine::profile_store::{JsonFileRepository, ProfileRepository, ProfileStore};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::roster::RosterBuilder;
use crate::engine::settings_io::{load_settings, save_settings, settings_path};
use crate::engine::turn::TurnEngine;
use crate::model::challenge::ChallengeRequest;
use crate::model::mood::{ChallengeType, Mood};
use crate::model::player::Player;
use crate::model::settings::GeneratorSettings;
use crate::ui::{game_screen, home_screen, mood_screen, premium_modal, profile_screen, setup_screen};

const TESTING_CONNECTION: &str = "Testing…";

/* =========================
   Screens
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Setup,
    Mood,
    Game,
    Profile,
}

/* =========================
   Profile form
   ========================= */

pub struct ProfileForm {
    pub username: String,
    pub new_text: String,
    pub new_kind: ChallengeType,
    pub new_mood: Mood,
    /// Generator settings being edited; applied only on Save.
    pub settings: GeneratorSettings,
}

impl ProfileForm {
    fn new(username: &str, settings: &GeneratorSettings) -> Self {
        Self {
            username: username.to_string(),
            new_text: String::new(),
            new_kind: ChallengeType::Truth,
            new_mood: Mood::Funny,
            settings: settings.clone(),
        }
    }
}

/* =========================
   App state
   ========================= */

/// Everything the screens read and mutate, independent of egui.
pub struct AppState<R: ProfileRepository> {
    pub screen: Screen,
    pub show_premium_modal: bool,
    pub store: ProfileStore<R>,
    pub settings: GeneratorSettings,
    pub roster: RosterBuilder,
    pub players: Vec<Player>,
    pub game: Option<TurnEngine>,
    pub profile_form: ProfileForm,
    pub connection_status: Option<String>,

    cmd_tx: mpsc::Sender<EngineCommand>,
    settings_path: PathBuf,
}

impl<R: ProfileRepository> AppState<R> {
    pub fn new(
        store: ProfileStore<R>,
        settings: GeneratorSettings,
        settings_path: PathBuf,
        cmd_tx: mpsc::Sender<EngineCommand>,
    ) -> Self {
        let profile_form = ProfileForm::new(&store.profile().username, &settings);
        Self {
            screen: Screen::Home,
            show_premium_modal: false,
            store,
            settings,
            roster: RosterBuilder::new(),
            players: Vec::new(),
            game: None,
            profile_form,
            connection_status: None,
            cmd_tx,
            settings_path,
        }
    }

    pub fn start_setup(&mut self) {
        self.roster = RosterBuilder::new();
        self.screen = Screen::Setup;
    }

    pub fn open_profile(&mut self) {
        if self.screen == Screen::Game {
            self.exit_game();
        }
        self.profile_form.username = self.store.profile().username.clone();
        self.profile_form.settings = self.settings.clone();
        self.screen = Screen::Profile;
    }

    pub fn go_home(&mut self) {
        if self.screen == Screen::Game {
            self.exit_game();
        } else {
            self.screen = Screen::Home;
        }
    }

    pub fn submit_roster(&mut self) -> bool {
        match self.roster.submit() {
            Some(players) => {
                self.players = players;
                self.screen = Screen::Mood;
                true
            }
            None => false,
        }
    }

    pub fn select_mood(&mut self, mood: Mood) {
        match select(mood, self.store.is_premium()) {
            MoodSelection::Start(mood) => {
                let Some(game) = TurnEngine::new(self.players.clone(), mood) else {
                    log::warn!("mood picked without a roster, back to setup");
                    self.screen = Screen::Setup;
                    return;
                };
                log::info!("starting {mood} game with {} players", self.players.len());
                self.game = Some(game);
                self.screen = Screen::Game;
            }
            MoodSelection::UpgradePrompt => {
                self.show_premium_modal = true;
            }
        }
    }

    pub fn confirm_upgrade(&mut self) {
        self.store.unlock_premium();
        self.show_premium_modal = false;
    }

    pub fn choose(&mut self, kind: ChallengeType) {
        let request = self.game.as_mut().and_then(|g| g.choose(kind));
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    pub fn reroll(&mut self) {
        let request = self.game.as_mut().and_then(TurnEngine::reroll);
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    pub fn complete_turn(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.complete();
        }
    }

    pub fn forfeit_turn(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.forfeit();
        }
    }

    /// Leaves the game; a game with finished turns is kept in the profile.
    pub fn exit_game(&mut self) {
        if let Some(game) = self.game.take() {
            if !game.history().is_empty() {
                self.store.record_game(game.snapshot());
            }
        }
        self.screen = Screen::Home;
    }

    pub fn handle_response(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::ChallengeReady { request_id, text } => {
                if let Some(game) = self.game.as_mut() {
                    game.receive(request_id, text);
                }
            }
            EngineResponse::ConnectionStatus(status) => {
                self.connection_status = Some(status);
            }
        }
    }

    pub fn apply_settings(&mut self, settings: GeneratorSettings) {
        let settings = settings.sanitized();
        save_settings(&self.settings_path, &settings);
        self.settings = settings.clone();
        let _ = self.cmd_tx.send(EngineCommand::UpdateSettings(settings));
    }

    /// Applies the edited settings and shows back what was kept.
    pub fn save_settings_draft(&mut self) {
        self.apply_settings(self.profile_form.settings.clone());
        self.profile_form.settings = self.settings.clone();
    }

    pub fn test_connection(&mut self) {
        self.connection_status = Some(TESTING_CONNECTION.into());
        if self.cmd_tx.send(EngineCommand::TestConnection).is_err() {
            self.connection_status = Some("Engine is not running".into());
        }
    }

    /// Called once per frame: writes the profile back if anything changed.
    pub fn flush_profile(&mut self) {
        if let Err(err) = self.store.flush() {
            log::error!("could not save profile: {err}");
        }
    }

    fn dispatch(&mut self, request: ChallengeRequest) {
        let request_id = request.request_id;
        if self.cmd_tx.send(EngineCommand::GenerateChallenge(request)).is_err() {
            log::error!("engine thread is gone, request {request_id} falls back");
            if let Some(game) = self.game.as_mut() {
                game.receive(request_id, FALLBACK_CHALLENGE.to_string());
            }
        }
    }
}

/* =========================
   App
   ========================= */

pub struct DareDashApp {
    state: AppState<JsonFileRepository>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl DareDashApp {
    pub fn new() -> anyhow::Result<Self> {
        let path = settings_path();
        let settings = load_settings(&path);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let mut engine = Engine::new(cmd_rx, resp_tx, settings.clone())?;
        std::thread::spawn(move || {
            engine.run();
        });

        let repo = JsonFileRepository::in_config_dir();
        log::info!("profile file: {}", repo.path().display());
        let store = ProfileStore::load(repo);

        Ok(Self {
            state: AppState::new(store, settings, path, cmd_tx),
            resp_rx,
        })
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for DareDashApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.state.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.state.handle_response(resp);
        }

        let state = &mut self.state;

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("DareDash");
                if state.store.is_premium() {
                    ui.label(egui::RichText::new("PRO").strong().color(egui::Color32::GOLD));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Profile").clicked() {
                        state.open_profile();
                    }
                    if state.screen != Screen::Home && ui.button("Exit").clicked() {
                        state.go_home();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match state.screen {
                Screen::Home => home_screen::draw(ui, state),
                Screen::Setup => setup_screen::draw(ui, state),
                Screen::Mood => mood_screen::draw(ui, state),
                Screen::Game => game_screen::draw(ui, state),
                Screen::Profile => profile_screen::draw(ui, state),
            });
        });

        premium_modal::draw(ctx, state);

        state.flush_profile();

        // Keep polling the engine while a card is being generated.
        let testing = state.connection_status.as_deref() == Some(TESTING_CONNECTION);
        if state.game.as_ref().is_some_and(TurnEngine::is_loading) || testing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn card(ui: &mut egui::Ui, color: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

pub fn kind_color(kind: ChallengeType) -> egui::Color32 {
    match kind {
        ChallengeType::Truth => egui::Color32::from_rgb(40, 70, 140),
        ChallengeType::Dare => egui::Color32::from_rgb(150, 40, 60),
    }
}
