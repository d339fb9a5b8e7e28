use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::generation::generator::{client_from_config, ReplyGenerator};
use crate::generation::prompts::Verbatim;
use crate::generation::templates::{RandomSource, SeededRandom, ThreadRandom};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: ReplyGenerator,
}

impl AppState {
    /// Wires the generator from configuration: upstream client (if the key is
    /// usable), template randomness (seeded when `TEMPLATE_SEED` is set).
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = client_from_config(config)?;
        let random: Arc<dyn RandomSource> = match config.template_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };

        Ok(AppState {
            generator: ReplyGenerator::new(client, random, Arc::new(Verbatim)),
        })
    }
}
