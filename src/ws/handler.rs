//! WebSocket session handling
//!
//! One session per connection: a writer task drains the connection's
//! outbox onto the socket, a forwarder mirrors registry room-list
//! broadcasts into the outbox, and the reader loop dispatches named calls
//! to rooms. Typed failures go back as `error` messages; the socket stays
//! up.

use std::collections::HashSet;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::app::AppState;
use crate::game::error::GameError;
use crate::game::room::ConnectionHandle;
use crate::util::rate_limit::ConnectionRateLimiter;
use crate::util::time::unix_millis;
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection_id = Uuid::new_v4();
    info!(connection_id = %connection_id, "new WebSocket connection");

    let (mut ws_sink, mut ws_stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMsg>();

    let _ = tx.send(ServerMsg::Welcome {
        connection_id,
        server_time: unix_millis(),
    });

    // Writer task: outbox -> socket.
    let writer_id = connection_id;
    let writer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = send_msg(&mut ws_sink, &msg).await {
                debug!(connection_id = %writer_id, error = %e, "WebSocket send failed");
                break;
            }
        }
    });

    // Forward registry room-list updates into the outbox.
    let mut room_list_rx = state.registry.subscribe_room_list();
    let list_tx = tx.clone();
    let list_forwarder = tokio::spawn(async move {
        loop {
            match room_list_rx.recv().await {
                Ok(msg) => {
                    if list_tx.send(msg).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(lagged = n, "room list receiver lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let handle = ConnectionHandle {
        id: connection_id,
        tx: tx.clone(),
    };
    let rate_limiter = ConnectionRateLimiter::new();
    let mut joined_rooms: HashSet<String> = HashSet::new();

    while let Some(result) = ws_stream.next().await {
        match result {
            Ok(Message::Text(text)) => {
                if !rate_limiter.check_input() {
                    warn!(connection_id = %connection_id, "rate limited message");
                    let _ = tx.send(ServerMsg::Error {
                        code: "rate_limited".to_string(),
                        message: "too many messages, slow down".to_string(),
                    });
                    continue;
                }

                match serde_json::from_str::<ClientMsg>(&text) {
                    Ok(msg) => {
                        if let Err(e) = dispatch(&state, &handle, &mut joined_rooms, msg) {
                            let _ = tx.send(ServerMsg::Error {
                                code: e.code().to_string(),
                                message: e.to_string(),
                            });
                        }
                    }
                    Err(e) => {
                        warn!(connection_id = %connection_id, error = %e, "failed to parse client message");
                        let _ = tx.send(ServerMsg::Error {
                            code: "bad_request".to_string(),
                            message: "malformed message".to_string(),
                        });
                    }
                }
            }
            Ok(Message::Close(_)) => {
                info!(connection_id = %connection_id, "client initiated close");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    // Disconnect cleanup in every room this connection touched.
    for code in &joined_rooms {
        if let Ok(room) = state.registry.get(code) {
            room.connection_closed(connection_id);
        }
    }
    writer.abort();
    list_forwarder.abort();
    info!(connection_id = %connection_id, "WebSocket connection closed");
}

/// Route one named remote call. Every arm either pushes its success
/// payload into the outbox or returns a typed failure for the caller.
fn dispatch(
    state: &AppState,
    handle: &ConnectionHandle,
    joined_rooms: &mut HashSet<String>,
    msg: ClientMsg,
) -> Result<(), GameError> {
    let registry = &state.registry;
    let tx = &handle.tx;

    match msg {
        ClientMsg::CreateRoom => {
            let room = registry.create_room();
            joined_rooms.insert(room.code().to_string());
            room.subscribe(handle.clone());
            let _ = tx.send(ServerMsg::RoomCreated {
                room_code: room.code().to_string(),
            });
        }
        ClientMsg::JoinRoom { room_code } => {
            let room = registry.get(&room_code)?;
            joined_rooms.insert(room.code().to_string());
            room.subscribe(handle.clone());
        }
        ClientMsg::RegisterAlias { room_code, alias } => {
            let room = registry.get(&room_code)?;
            joined_rooms.insert(room.code().to_string());
            let player = room.register_alias(handle.clone(), &alias)?;
            let _ = tx.send(ServerMsg::AliasRegistered { player });
        }
        ClientMsg::RegisterAdmin { room_code, token } => {
            let room = registry.get(&room_code)?;
            joined_rooms.insert(room.code().to_string());
            room.register_admin(handle.clone(), &token)?;
        }
        ClientMsg::RegisterSpectator { room_code } => {
            let room = registry.get(&room_code)?;
            joined_rooms.insert(room.code().to_string());
            room.register_spectator(handle.clone());
        }
        ClientMsg::ToggleReady { room_code, ready } => {
            registry.get(&room_code)?.toggle_ready(handle.id, ready)?;
        }
        ClientMsg::VoteToStart { room_code } => {
            registry.get(&room_code)?.vote_to_start(handle.id)?;
        }
        ClientMsg::PlayGuess {
            room_code,
            guess,
            guess_number,
        } => {
            let board = registry
                .get(&room_code)?
                .play_guess(handle.id, &guess, guess_number)?;
            let _ = tx.send(ServerMsg::BoardUpdated { board });
        }
        ClientMsg::SuggestGuess { room_code } => {
            let word = registry.get(&room_code)?.suggest_guess(handle.id)?;
            let _ = tx.send(ServerMsg::SuggestedGuess { word });
        }
        ClientMsg::GiveUp { room_code } => {
            let board = registry.get(&room_code)?.give_up(handle.id)?;
            let _ = tx.send(ServerMsg::BoardUpdated { board });
        }
        ClientMsg::RevealAbsentLetter { room_code } => {
            let board = registry.get(&room_code)?.reveal_absent_letter(handle.id)?;
            let _ = tx.send(ServerMsg::BoardUpdated { board });
        }
        ClientMsg::RevealPresentLetter { room_code } => {
            let board = registry.get(&room_code)?.reveal_present_letter(handle.id)?;
            let _ = tx.send(ServerMsg::BoardUpdated { board });
        }
        ClientMsg::LogOut { room_code } => {
            registry.get(&room_code)?.log_out(handle.id);
        }
        ClientMsg::SendChat { room_code, message } => {
            registry.get(&room_code)?.send_chat(handle.id, &message)?;
        }
        ClientMsg::Typing { room_code } => {
            registry.get(&room_code)?.typing(handle.id)?;
        }
        ClientMsg::StopTyping { room_code } => {
            registry.get(&room_code)?.stop_typing(handle.id)?;
        }
        ClientMsg::KickPlayer { room_code, alias } => {
            registry.get(&room_code)?.kick_player(handle.id, &alias)?;
        }
        ClientMsg::DisconnectPlayer { room_code, alias } => {
            registry.get(&room_code)?.disconnect_player(handle.id, &alias)?;
        }
        ClientMsg::HardReset { room_code } => {
            registry.get(&room_code)?.hard_reset(handle.id)?;
        }
        ClientMsg::UpdateGuessTimeLimit { room_code, seconds } => {
            registry
                .get(&room_code)?
                .update_guess_time_limit(handle.id, seconds)?;
        }
        ClientMsg::UpdateMaxGuesses {
            room_code,
            max_guesses,
        } => {
            registry
                .get(&room_code)?
                .update_max_guesses(handle.id, max_guesses)?;
        }
        ClientMsg::UpdateAnswerList {
            room_code,
            list_type,
        } => {
            registry
                .get(&room_code)?
                .update_answer_list(handle.id, list_type)?;
        }
        ClientMsg::AddBot {
            room_code,
            personality,
        } => {
            registry.get(&room_code)?.add_bot(handle.id, personality)?;
        }
        ClientMsg::GetRoomList => {
            let _ = tx.send(registry.room_list_msg());
        }
        ClientMsg::GetRoundState { room_code } => {
            let _ = tx.send(registry.get(&room_code)?.round_state_for(handle.id));
        }
        ClientMsg::GetGameParameters { room_code } => {
            let params = registry.get(&room_code)?.game_parameters();
            let _ = tx.send(ServerMsg::GameParametersUpdated { params });
        }
        ClientMsg::GetPointSchedule => {
            let _ = tx.send(ServerMsg::PointSchedule {
                schedule: (*state.schedule).clone(),
            });
        }
        ClientMsg::GetPlayerBoard { room_code } => {
            let board = registry.get(&room_code)?.player_board(handle.id);
            let _ = tx.send(ServerMsg::PlayerBoard { board });
        }
        ClientMsg::GetChatHistory { room_code } => {
            let messages = registry.get(&room_code)?.chat_history();
            let _ = tx.send(ServerMsg::ChatHistory { messages });
        }
        ClientMsg::Ping { t } => {
            let _ = tx.send(ServerMsg::Pong { t });
        }
    }
    Ok(())
}

/// Send a message over WebSocket
async fn send_msg(
    sink: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMsg,
) -> Result<(), String> {
    let json = serde_json::to_string(msg).map_err(|e| e.to_string())?;
    sink.send(Message::Text(json))
        .await
        .map_err(|e| e.to_string())
}
