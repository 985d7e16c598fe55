//! Immutable dialog content.
//!
//! `DialogContent` is the configuration value a producer hands to an
//! item: identity, priority, and the user-facing strings a surface may
//! render. It is constructed once with `with_*` builder methods and never
//! mutated afterwards; the scheduler itself only ever reads the id and
//! priority.

use serde::{Deserialize, Serialize};

use crate::scheduler::Priority;

/// Content and identity of a single dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogContent {
    /// Deduplication key. Defaults to the message text.
    pub id: String,

    /// Optional headline above the message.
    pub title: Option<String>,

    /// Body text.
    pub message: String,

    /// Button labels, left to right.
    pub buttons: Vec<String>,

    /// Optional button colors, matched to `buttons` by index.
    pub button_colors: Vec<String>,

    /// Urgency used by the scheduler.
    pub priority: Priority,
}

impl DialogContent {
    /// Create content with the given message and the stock defaults:
    /// a single "OK" button, NORMAL priority, and the message as id.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            id: message.clone(),
            title: None,
            message,
            buttons: vec!["OK".to_string()],
            button_colors: Vec::new(),
            priority: Priority::Normal,
        }
    }

    /// Set an explicit id instead of the message-derived default.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the button labels.
    pub fn with_buttons(mut self, buttons: Vec<String>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set button colors, index-matched to the labels.
    pub fn with_button_colors(mut self, colors: Vec<String>) -> Self {
        self.button_colors = colors;
        self
    }

    /// Set the scheduling priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
