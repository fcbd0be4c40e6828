//! Application state shared across routes

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::game::registry::RoomRegistry;
use crate::game::scoring::PointSchedule;
use crate::words::WordCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub words: Arc<WordCatalog>,
    pub schedule: Arc<PointSchedule>,
    pub registry: Arc<RoomRegistry>,
}

impl AppState {
    /// Build the state plus the receiver the registry's summary pump
    /// drains (spawn [`RoomRegistry::run_summary_pump`] with it).
    pub fn new(config: Config) -> (Self, mpsc::UnboundedReceiver<()>) {
        let config = Arc::new(config);

        let words = Arc::new(WordCatalog::new());
        let schedule = Arc::new(PointSchedule::default());

        let (registry, summary_rx) =
            RoomRegistry::new(words.clone(), schedule.clone(), config.admin_token.clone());

        (
            Self {
                config,
                words,
                schedule,
                registry,
            },
            summary_rx,
        )
    }
}
