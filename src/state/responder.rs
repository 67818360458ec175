//! Rule-based dialogue responder
//!
//! This module implements the assistant's turn logic: an incoming utterance
//! plus the carried dialogue state produce a reply text and the successor
//! state. Classification is priority-ordered and first-match-wins; the rule
//! order is part of the contract, not an implementation detail.

use rand::Rng;
use tracing::debug;

use crate::catalog::ReplyCatalog;
use super::context::{DialogueState, Topic};

/// Exact-match tokens signaling agreement
const AFFIRMATIVE_TOKENS: &[&str] = &[
    "yes", "ya", "yeah", "ok", "k", "okay", "sure", "yep", "yup", "please",
];

/// Exact-match tokens signaling refusal
const NEGATIVE_TOKENS: &[&str] = &["no", "nope", "nah", "not now", "later"];

/// Classified meaning of a single utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Affirmative,
    Negative,
    ClassSchedule,
    Appointments,
    Scholarship,
    Navigation,
    StudyTimer,
    Motivation,
    Help,
    Fallback,
}

impl Intent {
    /// Classify a normalized (trimmed, lowercased) utterance
    ///
    /// Rules are evaluated in priority order: affirmative and negative
    /// exact matches first, then keyword substrings. "class schedule"
    /// therefore wins over "appointment" when both appear in one message.
    pub fn classify(normalized: &str) -> Intent {
        if AFFIRMATIVE_TOKENS.contains(&normalized) {
            return Intent::Affirmative;
        }
        if NEGATIVE_TOKENS.contains(&normalized) {
            return Intent::Negative;
        }

        if normalized.contains("class") || normalized.contains("schedule") {
            Intent::ClassSchedule
        } else if normalized.contains("appointment") {
            Intent::Appointments
        } else if normalized.contains("scholarship") {
            Intent::Scholarship
        } else if normalized.contains("navigation")
            || normalized.contains("campus")
            || normalized.contains("find")
            || normalized.contains("where")
        {
            Intent::Navigation
        } else if normalized.contains("timer") || normalized.contains("study") {
            Intent::StudyTimer
        } else if normalized.contains("motivat")
            || normalized.contains("quote")
            || normalized.contains("inspire")
        {
            Intent::Motivation
        } else if normalized.contains("help") || normalized == "hi" || normalized == "hello" {
            Intent::Help
        } else {
            Intent::Fallback
        }
    }

    /// Stable token for structured logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Affirmative => "affirmative",
            Intent::Negative => "negative",
            Intent::ClassSchedule => "class_schedule",
            Intent::Appointments => "appointments",
            Intent::Scholarship => "scholarship",
            Intent::Navigation => "navigation",
            Intent::StudyTimer => "study_timer",
            Intent::Motivation => "motivation",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

/// One completed turn: the reply text and the state to carry forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub next_state: DialogueState,
}

/// Picks an index into a list of the given length
pub type QuotePicker = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// Rule-based responder mapping (state, utterance) to a reply
///
/// Pure except for the quote picker, which is an injected dependency so
/// tests can pin the selection.
pub struct DialogueResponder {
    catalog: ReplyCatalog,
    picker: QuotePicker,
}

impl DialogueResponder {
    /// Create a responder drawing quotes from the thread RNG
    pub fn new(catalog: ReplyCatalog) -> Self {
        Self::with_picker(
            catalog,
            Box::new(|len| rand::thread_rng().gen_range(0..len)),
        )
    }

    /// Create a responder with a custom quote picker
    pub fn with_picker(catalog: ReplyCatalog, picker: QuotePicker) -> Self {
        Self { catalog, picker }
    }

    /// The catalog this responder replies from
    pub fn catalog(&self) -> &ReplyCatalog {
        &self.catalog
    }

    /// Process one turn
    ///
    /// Total over all string inputs: an utterance matching no rule falls
    /// through to the fallback reply. The returned state replaces the
    /// caller's state for the next turn.
    pub fn respond(&self, state: &DialogueState, utterance: &str) -> Reply {
        let trimmed = utterance.trim();
        let normalized = trimmed.to_lowercase();
        let intent = Intent::classify(&normalized);

        debug!(
            intent = intent.as_str(),
            pending = state.pending_label(),
            "Utterance classified"
        );

        let (text, pending) = match intent {
            Intent::Affirmative => match state.pending_topic {
                Some(Topic::Appointments) => (self.catalog.appointment_slots.clone(), None),
                Some(Topic::StudyTimer) => (self.catalog.timer_started.clone(), None),
                Some(Topic::Navigation) => (self.catalog.navigation_building.clone(), None),
                None => (self.catalog.affirmative_prompt.clone(), None),
            },
            Intent::Negative => (self.catalog.negative_ack.clone(), None),
            Intent::ClassSchedule => (self.catalog.class_schedule.clone(), None),
            Intent::Appointments => {
                (self.catalog.appointments_prompt.clone(), Some(Topic::Appointments))
            }
            Intent::Scholarship => (self.catalog.scholarship_status.clone(), None),
            Intent::Navigation => {
                (self.catalog.campus_navigation.clone(), Some(Topic::Navigation))
            }
            Intent::StudyTimer => {
                (self.catalog.study_timer_prompt.clone(), Some(Topic::StudyTimer))
            }
            Intent::Motivation => (self.pick_quote(trimmed), None),
            Intent::Help => (self.catalog.capability_overview.clone(), None),
            Intent::Fallback => (self.catalog.fallback_reply(trimmed), None),
        };

        Reply {
            text,
            next_state: DialogueState { pending_topic: pending },
        }
    }

    /// Draw one quote through the injected picker
    ///
    /// The picker's index is taken modulo the list length; an empty quote
    /// list (ruled out by catalog validation) degrades to the fallback.
    fn pick_quote(&self, trimmed: &str) -> String {
        let quotes = &self.catalog.quotes;
        if quotes.is_empty() {
            return self.catalog.fallback_reply(trimmed);
        }
        let index = (self.picker)(quotes.len()) % quotes.len();
        quotes[index].clone()
    }
}

impl std::fmt::Debug for DialogueResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueResponder")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
