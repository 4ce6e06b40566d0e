use std::sync::mpsc::{Receiver, Sender};

use crate::engine::llm_client::{generate_or_fallback, test_connection, ChallengeGenerator, GeminiClient};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::settings::GeneratorSettings;

/// Background worker that owns the generator and runs the blocking calls.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    settings: GeneratorSettings,
    generator: Box<dyn ChallengeGenerator + Send>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        settings: GeneratorSettings,
    ) -> anyhow::Result<Self> {
        let generator = Box::new(GeminiClient::from_env(settings.clone())?);
        Ok(Self::with_generator(rx, tx, settings, generator))
    }

    pub fn with_generator(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        settings: GeneratorSettings,
        generator: Box<dyn ChallengeGenerator + Send>,
    ) -> Self {
        Self {
            rx,
            tx,
            settings,
            generator,
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::GenerateChallenge(request) => {
                    let text = generate_or_fallback(self.generator.as_ref(), &request);
                    let _ = self.tx.send(EngineResponse::ChallengeReady {
                        request_id: request.request_id,
                        text,
                    });
                }

                EngineCommand::UpdateSettings(settings) => match GeminiClient::from_env(settings.clone()) {
                    Ok(client) => {
                        self.generator = Box::new(client);
                        self.settings = settings;
                    }
                    Err(err) => log::error!("keeping previous generator settings: {err}"),
                },

                EngineCommand::TestConnection => {
                    let status = match test_connection(&self.settings) {
                        Ok(status) => status,
                        Err(err) => format!("Connection failed: {err}"),
                    };
                    let _ = self.tx.send(EngineResponse::ConnectionStatus(status));
                }
            }
        }
        log::debug!("engine channel closed, worker exiting");
    }
}
