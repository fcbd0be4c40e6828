//! Room registry: creation, lookup and room-list broadcasting

use std::sync::Arc;

use dashmap::DashMap;
use rand::Rng;
use tokio::sync::{broadcast, mpsc};
use tracing::info;

use crate::game::error::GameError;
use crate::game::room::Room;
use crate::game::scoring::PointSchedule;
use crate::game::GameParameters;
use crate::words::WordCatalog;
use crate::ws::protocol::{RoomSummary, ServerMsg};

const ROOM_CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ROOM_CODE_LEN: usize = 5;

/// Creates and looks up rooms; pushes room-list updates to home-screen
/// subscribers. Rooms live for the process lifetime.
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Room>>,
    words: Arc<WordCatalog>,
    schedule: Arc<PointSchedule>,
    admin_token: Option<String>,
    /// Rooms poke this when their summary changes
    summary_tx: mpsc::UnboundedSender<()>,
    room_list_tx: broadcast::Sender<ServerMsg>,
}

impl RoomRegistry {
    /// Returns the registry plus the receiver for its summary pump (see
    /// [`RoomRegistry::run_summary_pump`]).
    pub fn new(
        words: Arc<WordCatalog>,
        schedule: Arc<PointSchedule>,
        admin_token: Option<String>,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (summary_tx, summary_rx) = mpsc::unbounded_channel();
        let (room_list_tx, _) = broadcast::channel(64);
        (
            Arc::new(Self {
                rooms: DashMap::new(),
                words,
                schedule,
                admin_token,
                summary_tx,
                room_list_tx,
            }),
            summary_rx,
        )
    }

    pub fn create_room(&self) -> Arc<Room> {
        let mut rng = rand::thread_rng();
        let code = loop {
            let candidate: String = (0..ROOM_CODE_LEN)
                .map(|_| ROOM_CODE_CHARS[rng.gen_range(0..ROOM_CODE_CHARS.len())] as char)
                .collect();
            if !self.rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        let room = Room::new(
            code.clone(),
            GameParameters::default(),
            self.words.clone(),
            self.schedule.clone(),
            self.admin_token.clone(),
            self.summary_tx.clone(),
        );
        self.rooms.insert(code.clone(), room.clone());
        info!(room_code = %code, "room created");

        let _ = self.summary_tx.send(());
        room
    }

    pub fn get(&self, code: &str) -> Result<Arc<Room>, GameError> {
        let code = code.trim().to_uppercase();
        self.rooms
            .get(&code)
            .map(|entry| entry.value().clone())
            .ok_or(GameError::RoomNotFound(code))
    }

    pub fn summaries(&self) -> Vec<RoomSummary> {
        self.rooms
            .iter()
            .map(|entry| entry.value().summary())
            .collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn total_players(&self) -> usize {
        self.rooms
            .iter()
            .map(|entry| entry.value().player_count())
            .sum()
    }

    /// Subscribe to room-list updates (sessions forward these to sockets)
    pub fn subscribe_room_list(&self) -> broadcast::Receiver<ServerMsg> {
        self.room_list_tx.subscribe()
    }

    pub fn room_list_msg(&self) -> ServerMsg {
        ServerMsg::RoomList {
            rooms: self.summaries(),
        }
    }

    /// Drain summary-changed pokes and rebroadcast the room list. Run as a
    /// background task for the process lifetime.
    pub async fn run_summary_pump(self: Arc<Self>, mut summary_rx: mpsc::UnboundedReceiver<()>) {
        while summary_rx.recv().await.is_some() {
            // Collapse bursts of pokes into one broadcast.
            while summary_rx.try_recv().is_ok() {}
            let _ = self.room_list_tx.send(self.room_list_msg());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<RoomRegistry> {
        RoomRegistry::new(
            Arc::new(WordCatalog::new()),
            Arc::new(PointSchedule::default()),
            None,
        )
        .0
    }

    #[test]
    fn room_codes_are_unique_and_well_formed() {
        let registry = registry();
        let mut codes = std::collections::HashSet::new();
        for _ in 0..50 {
            let room = registry.create_room();
            let code = room.code().to_string();
            assert_eq!(code.len(), ROOM_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(codes.insert(code));
        }
        assert_eq!(registry.room_count(), 50);
    }

    #[test]
    fn lookup_is_case_insensitive_and_missing_rooms_fail() {
        let registry = registry();
        let room = registry.create_room();
        let code = room.code().to_string();
        assert!(registry.get(&code.to_lowercase()).is_ok());
        assert_eq!(
            registry.get("ZZZZZ").map(|_| ()),
            Err(GameError::RoomNotFound("ZZZZZ".to_string()))
        );
    }
}
