//! Reply catalog loading and management
//!
//! This module holds every fixed text the assistant can produce: canned
//! replies, the motivational quote list, the greeting, and the suggestion
//! chips shown by the presentation shell. A deployment can override any
//! entry from a JSON file; missing entries keep their built-in text.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, debug};

use crate::utils::errors::{CampusBuddyError, Result};

/// Catalog of fixed reply texts used by the dialogue responder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplyCatalog {
    /// Opening message shown once when a conversation starts
    pub greeting: String,
    /// Affirmative reply when no topic is pending
    pub affirmative_prompt: String,
    /// Slots listing sent after confirming an appointment booking
    pub appointment_slots: String,
    /// Confirmation sent after starting the study timer
    pub timer_started: String,
    /// Follow-up question sent after confirming navigation help
    pub navigation_building: String,
    /// Acknowledgement for a negative reply
    pub negative_ack: String,
    pub class_schedule: String,
    pub appointments_prompt: String,
    pub scholarship_status: String,
    pub campus_navigation: String,
    pub study_timer_prompt: String,
    pub capability_overview: String,
    /// Fallback template; `{utterance}` is replaced with the user's text
    pub fallback_template: String,
    /// Motivational quotes, one drawn at random per request
    pub quotes: Vec<String>,
    /// Quick-reply suggestions rendered by the shell
    pub suggestion_chips: Vec<String>,
}

impl Default for ReplyCatalog {
    fn default() -> Self {
        Self {
            greeting: "Hello! How can I help you today?".to_string(),
            affirmative_prompt: "Great! What would you like help with?".to_string(),
            appointment_slots: "Perfect! Here are available slots:\n\
                • Dr. Smith (Counselor) - Tomorrow 2PM\n\
                • Dr. Johnson (Health) - Friday 10AM\n\
                Which one would you prefer?".to_string(),
            timer_started: "🎯 Study timer started! 25 minutes of focused work time. \
                I'll notify you when it's time for a break. Good luck!".to_string(),
            navigation_building: "I can show you the quickest route. \
                Which building are you trying to reach?".to_string(),
            negative_ack: "No problem! Let me know if you need anything else. 😊".to_string(),
            class_schedule: "📚 Your next class is:\n\
                • Computer Science 101\n\
                • Time: 2:00 PM - 3:30 PM\n\
                • Room: Engineering Block, Room 305\n\
                • Professor: Dr. Anderson".to_string(),
            appointments_prompt: "I can help you book appointments with counselors or \
                health services. Would you like to see available time slots?".to_string(),
            scholarship_status: "🎓 Your Scholarship Status:\n\
                • Merit Scholarship - Pending Review\n\
                • Athletic Scholarship - Approved ✓\n\
                • Upcoming Deadline: Nov 15th for Spring Applications".to_string(),
            campus_navigation: "🗺️ I can help you navigate campus! Popular locations:\n\
                • Library\n\
                • Student Center\n\
                • Cafeteria\n\
                • Engineering Block\n\
                Would you like directions?".to_string(),
            study_timer_prompt: "⏱️ Your study timer is currently inactive. \
                Would you like to start a 25-minute Pomodoro focus session?".to_string(),
            capability_overview: "I'm your student assistant! I can help you with:\n\
                • Class schedules\n\
                • Booking appointments\n\
                • Scholarship information\n\
                • Campus navigation\n\
                • Study timers\n\
                • Motivational support\n\n\
                What would you like to know?".to_string(),
            fallback_template: "I'm here to help with \"{utterance}\"! Try asking about \
                your classes, appointments, scholarships, campus navigation, or study tools. 🎓".to_string(),
            quotes: vec![
                "💪 \"Success is the sum of small efforts repeated day in and day out.\" - Keep pushing forward!".to_string(),
                "🌟 \"The expert in anything was once a beginner.\" - You're doing great!".to_string(),
                "🚀 \"Education is the passport to the future.\" - Your hard work will pay off!".to_string(),
                "✨ \"Believe you can and you're halfway there.\" - Keep believing in yourself!".to_string(),
                "🎯 \"The only way to do great work is to love what you do.\" - Stay passionate!".to_string(),
            ],
            suggestion_chips: vec![
                "What's my next class?".to_string(),
                "Book appointments".to_string(),
                "Show my scholarships".to_string(),
                "Campus navigation help".to_string(),
                "Study timer status".to_string(),
                "Motivational tips".to_string(),
            ],
        }
    }
}

impl ReplyCatalog {
    /// Load a catalog override from a JSON file, falling back to built-in
    /// texts for any entry the file does not mention
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading reply catalog override");

        let content = fs::read_to_string(path).await?;
        let catalog: ReplyCatalog = serde_json::from_str(&content)?;
        catalog.validate()?;

        info!(path = %path.display(), "Reply catalog override loaded");
        Ok(catalog)
    }

    /// Validate catalog contents before any conversation starts
    pub fn validate(&self) -> Result<()> {
        for (name, text) in self.named_texts() {
            if text.trim().is_empty() {
                return Err(CampusBuddyError::Config(
                    format!("Reply catalog entry '{}' must not be empty", name)
                ));
            }
        }

        if self.quotes.is_empty() {
            return Err(CampusBuddyError::Config(
                "Reply catalog must contain at least one quote".to_string()
            ));
        }

        if self.quotes.iter().any(|q| q.trim().is_empty()) {
            return Err(CampusBuddyError::Config(
                "Reply catalog quotes must not be empty".to_string()
            ));
        }

        if self.suggestion_chips.is_empty() {
            return Err(CampusBuddyError::Config(
                "Reply catalog must contain at least one suggestion chip".to_string()
            ));
        }

        Ok(())
    }

    /// Render the fallback reply for an unrecognized utterance
    pub fn fallback_reply(&self, utterance: &str) -> String {
        self.fallback_template.replace("{utterance}", utterance)
    }

    fn named_texts(&self) -> [(&'static str, &str); 13] {
        [
            ("greeting", &self.greeting),
            ("affirmative_prompt", &self.affirmative_prompt),
            ("appointment_slots", &self.appointment_slots),
            ("timer_started", &self.timer_started),
            ("navigation_building", &self.navigation_building),
            ("negative_ack", &self.negative_ack),
            ("class_schedule", &self.class_schedule),
            ("appointments_prompt", &self.appointments_prompt),
            ("scholarship_status", &self.scholarship_status),
            ("campus_navigation", &self.campus_navigation),
            ("study_timer_prompt", &self.study_timer_prompt),
            ("capability_overview", &self.capability_overview),
            ("fallback_template", &self.fallback_template),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = ReplyCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.quotes.len(), 5);
        assert_eq!(catalog.suggestion_chips.len(), 6);
    }

    #[test]
    fn test_fallback_reply_embeds_utterance() {
        let catalog = ReplyCatalog::default();
        let reply = catalog.fallback_reply("purple elephant");
        assert!(reply.contains("\"purple elephant\""));
    }

    #[test]
    fn test_empty_quotes_rejected() {
        let mut catalog = ReplyCatalog::default();
        catalog.quotes.clear();
        assert_matches!(catalog.validate(), Err(CampusBuddyError::Config(_)));
    }

    #[test]
    fn test_empty_entry_rejected() {
        let mut catalog = ReplyCatalog::default();
        catalog.negative_ack = "   ".to_string();
        assert_matches!(catalog.validate(), Err(CampusBuddyError::Config(_)));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let catalog: ReplyCatalog =
            serde_json::from_str(r#"{"greeting": "Hi there! What can I do for you?"}"#).unwrap();
        assert_eq!(catalog.greeting, "Hi there! What can I do for you?");
        assert_eq!(catalog.negative_ack, ReplyCatalog::default().negative_ack);
        assert_eq!(catalog.quotes.len(), 5);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"timer_started": "Timer running. Focus!"}"#).unwrap();

        let catalog = ReplyCatalog::load_from_file(&path).await.unwrap();
        assert_eq!(catalog.timer_started, "Timer running. Focus!");
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        let result = ReplyCatalog::load_from_file("/nonexistent/catalog.json").await;
        assert_matches!(result, Err(CampusBuddyError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = ReplyCatalog::load_from_file(&path).await;
        assert_matches!(result, Err(CampusBuddyError::Serialization(_)));
    }
}
