//! # Message Log
//!
//! The conversation as an ordered list of [`Message`]s.
//!
//! The log hands out ids itself, so ids are strictly increasing in append
//! order and display order always equals causal order. Appending is the only
//! way in; the one exception is [`MessageLog::remove_loading`], which drops
//! the placeholder of the request in flight.

use chrono::{DateTime, Local};

use crate::api::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: Option<String>,
    pub repositories: Vec<Repository>,
    pub timestamp: DateTime<Local>,
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    fn push(&mut self, sender: Sender, text: Option<String>, repositories: Vec<Repository>, is_loading: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            text,
            repositories,
            timestamp: Local::now(),
            is_loading,
        });
        id
    }

    pub fn push_user(&mut self, text: String) -> u64 {
        self.push(Sender::User, Some(text), Vec::new(), false)
    }

    pub fn push_bot(&mut self, text: String) -> u64 {
        self.push(Sender::Bot, Some(text), Vec::new(), false)
    }

    pub fn push_bot_with_repositories(&mut self, text: String, repositories: Vec<Repository>) -> u64 {
        self.push(Sender::Bot, Some(text), repositories, false)
    }

    /// Appends the placeholder shown while a query is in flight.
    /// Replaces any placeholder still in the log so there is never more than one.
    pub fn push_loading(&mut self) -> u64 {
        self.remove_loading();
        self.push(Sender::Bot, None, Vec::new(), true)
    }

    /// Drops the loading placeholder, if any. Returns whether one was removed.
    pub fn remove_loading(&mut self) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| !m.is_loading);
        before != self.messages.len()
    }

    pub fn has_loading(&self) -> bool {
        self.messages.iter().any(|m| m.is_loading)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
