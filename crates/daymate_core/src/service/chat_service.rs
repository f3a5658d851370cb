//! Chat use-case service.
//!
//! # Responsibility
//! - Load the message history, seeding the sample exchange on first read.
//! - Append a user message plus the canned assistant reply and persist the
//!   full history.
//!
//! # Invariants
//! - History is append-only and ordered by insertion.
//! - Blank input is rejected before anything is written.
//! - The stored user message keeps the raw input text, untrimmed.

use crate::model::chat::{ChatMessage, Sender};
use crate::seed;
use crate::store::{DataStore, StoreError};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for chat use-cases.
#[derive(Debug)]
pub enum ChatServiceError {
    /// Input is empty or whitespace-only.
    EmptyMessage,
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ChatServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message text is empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChatServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ChatServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// The two messages appended by one send: the user's and the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user: ChatMessage,
    pub reply: ChatMessage,
}

/// Chat service facade over store implementations.
pub struct ChatService<S: DataStore> {
    store: S,
}

impl<S: DataStore> ChatService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the message history, writing the sample exchange first if the
    /// collection is empty.
    pub fn load_messages(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ChatMessage>, ChatServiceError> {
        let messages = self.store.get_chat_messages()?;
        if !messages.is_empty() {
            return Ok(messages);
        }

        let seeded = seed::sample_messages(now);
        self.store.save_chat_messages(&seeded)?;
        Ok(seeded)
    }

    /// Appends the user message and its assistant reply to the history and
    /// persists it.
    pub fn send_message(
        &self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<ChatExchange, ChatServiceError> {
        if text.trim().is_empty() {
            return Err(ChatServiceError::EmptyMessage);
        }

        let mut messages = self.store.get_chat_messages()?;
        let user = ChatMessage {
            id: Uuid::new_v4().to_string(),
            text: text.to_owned(),
            sender: Sender::User,
            timestamp: now,
            kind: None,
        };
        let reply = ChatMessage {
            id: Uuid::new_v4().to_string(),
            text: reply_to(text).to_owned(),
            sender: Sender::Ai,
            timestamp: now,
            kind: None,
        };
        messages.push(user.clone());
        messages.push(reply.clone());
        self.store.save_chat_messages(&messages)?;

        Ok(ChatExchange { user, reply })
    }
}

/// Picks the canned assistant reply for one user input.
///
/// Matching is case-insensitive substring containment, first branch wins.
/// Note `hi` matches inside longer words, so "this" routes to the greeting.
pub fn reply_to(input: &str) -> &'static str {
    let lower = input.to_lowercase();

    if lower.contains("task") || lower.contains("todo") {
        return "I can help you with your tasks! You can create, view, or manage your tasks in the Tasks tab. Would you like me to show you your pending tasks?";
    }
    if lower.contains("event") || lower.contains("calendar") || lower.contains("meeting") {
        return "I can help you manage your calendar! Check the Calendar tab to see your upcoming events. You have 2 events scheduled for today.";
    }
    if lower.contains("remind") {
        return "I'll help you set up a reminder. What would you like to be reminded about, and when?";
    }
    if lower.contains("hello") || lower.contains("hi") {
        return "Hello! I'm here to help you stay organized. You can ask me about your tasks, calendar events, or create reminders.";
    }

    "I'm here to help! You can ask me about your tasks, upcoming events, set reminders, or get productivity tips. What would you like to know?"
}

#[cfg(test)]
mod tests {
    use super::reply_to;

    #[test]
    fn task_words_route_to_the_tasks_reply() {
        assert!(reply_to("show my TASKS").contains("Tasks tab"));
        assert!(reply_to("update my todo list").contains("Tasks tab"));
    }

    #[test]
    fn calendar_words_route_to_the_calendar_reply() {
        assert!(reply_to("any events today?").contains("Calendar tab"));
        assert!(reply_to("open my calendar").contains("Calendar tab"));
        assert!(reply_to("when is the next meeting").contains("Calendar tab"));
    }

    #[test]
    fn remind_routes_to_the_reminder_prompt() {
        assert!(reply_to("remind me to stretch").starts_with("I'll help you set up a reminder"));
    }

    #[test]
    fn greetings_route_to_the_greeting() {
        assert!(reply_to("hello there").starts_with("Hello!"));
        assert!(reply_to("Hi").starts_with("Hello!"));
    }

    #[test]
    fn earlier_branches_win_over_later_ones() {
        // Contains both "task" and "hi" ("this"); the task branch is checked
        // first.
        assert!(reply_to("is this task done").contains("Tasks tab"));
    }

    #[test]
    fn hi_matches_inside_longer_words() {
        assert!(reply_to("this week").starts_with("Hello!"));
    }

    #[test]
    fn anything_else_gets_the_fallback() {
        assert!(reply_to("weather tomorrow?").starts_with("I'm here to help!"));
    }
}
