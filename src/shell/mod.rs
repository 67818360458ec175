//! Terminal chat shell
//!
//! The presentation layer around the dialogue responder: reads utterances
//! from stdin, renders replies, and owns everything the responder must not
//! touch, in particular the simulated typing delay and all turn logging.

use std::io::{self, Write};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ChatConfig;
use crate::state::{DialogueResponder, Intent, SessionStore};
use crate::utils::errors::{CampusBuddyError, Result};
use crate::utils::helpers::format_timestamp;
use crate::utils::logging::{log_session_event, log_turn};

/// Interactive chat session driver
pub struct ChatShell {
    responder: DialogueResponder,
    store: SessionStore,
    config: ChatConfig,
}

impl ChatShell {
    /// Create a new shell
    pub fn new(responder: DialogueResponder, store: SessionStore, config: ChatConfig) -> Self {
        Self { responder, store, config }
    }

    /// Open a fresh conversation session
    pub fn open_session(&mut self) -> Uuid {
        self.store.purge_expired();
        let session_id = self.store.create_session();
        log_session_event(session_id, "started");
        session_id
    }

    /// Process one utterance for a session and return the reply text
    pub fn handle_turn(&mut self, session_id: Uuid, utterance: &str) -> Result<String> {
        let state = self
            .store
            .load(session_id)
            .ok_or(CampusBuddyError::SessionNotFound { session_id })?;

        let intent = Intent::classify(&utterance.trim().to_lowercase());
        let reply = self.responder.respond(&state, utterance);
        self.store.save(session_id, reply.next_state)?;

        log_turn(session_id, intent.as_str(), utterance);
        Ok(reply.text)
    }

    /// Run the interactive loop until EOF or `/quit`
    pub async fn run(mut self) -> Result<()> {
        let session_id = self.open_session();

        println!("[session started {}]", format_timestamp(Utc::now()));
        println!("{}", self.responder.catalog().greeting);
        println!("Try: {}", self.responder.catalog().suggestion_chips.join(" | "));
        println!();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = read_line()? else {
                break;
            };
            let utterance = line.trim_end_matches(['\r', '\n']);

            if utterance.trim().is_empty() {
                continue;
            }
            if utterance.trim() == "/quit" {
                break;
            }

            tokio::time::sleep(self.typing_delay()).await;

            match self.handle_turn(session_id, utterance) {
                Ok(text) => println!("{}\n", text),
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Failed to process turn");
                }
                Err(e) => return Err(e),
            }
        }

        // the session may already be gone if it expired while idle
        if let Err(e) = self.store.remove(session_id) {
            warn!(error = %e, "Failed to remove session on shutdown");
        }
        log_session_event(session_id, "ended");
        info!("Chat session closed");
        Ok(())
    }

    /// Draw a simulated typing delay from the configured range
    fn typing_delay(&self) -> Duration {
        let min = self.config.typing_delay_min_ms;
        let max = self.config.typing_delay_max_ms;
        let millis = if min >= max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        Duration::from_millis(millis)
    }
}

/// Read one line from stdin; `None` on EOF
fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReplyCatalog;
    use crate::config::SessionConfig;
    use crate::state::Topic;
    use assert_matches::assert_matches;

    fn shell() -> ChatShell {
        ChatShell::new(
            DialogueResponder::new(ReplyCatalog::default()),
            SessionStore::new(&SessionConfig { ttl_seconds: 3600 }),
            ChatConfig::default(),
        )
    }

    #[test]
    fn test_handle_turn_carries_state_between_turns() {
        let mut shell = shell();
        let session_id = shell.open_session();

        let first = shell.handle_turn(session_id, "study").unwrap();
        assert_eq!(first, shell.responder.catalog().study_timer_prompt);
        assert!(shell
            .store
            .load(session_id)
            .unwrap()
            .is_awaiting(Topic::StudyTimer));

        let second = shell.handle_turn(session_id, "yes").unwrap();
        assert_eq!(second, shell.responder.catalog().timer_started);
        assert!(!shell.store.load(session_id).unwrap().has_pending());
    }

    #[test]
    fn test_handle_turn_unknown_session() {
        let mut shell = shell();
        let result = shell.handle_turn(Uuid::new_v4(), "hello");
        assert_matches!(result, Err(CampusBuddyError::SessionNotFound { .. }));
    }

    #[test]
    fn test_typing_delay_within_range() {
        let shell = shell();
        for _ in 0..50 {
            let delay = shell.typing_delay();
            assert!(delay >= Duration::from_millis(600));
            assert!(delay <= Duration::from_millis(1200));
        }
    }

    #[test]
    fn test_typing_delay_fixed_when_range_collapsed() {
        let mut shell = shell();
        shell.config = ChatConfig {
            typing_delay_min_ms: 250,
            typing_delay_max_ms: 250,
        };
        assert_eq!(shell.typing_delay(), Duration::from_millis(250));
    }
}
