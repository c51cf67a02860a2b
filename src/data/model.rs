use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Value stored in `response` for rows that are personal stories rather than chats.
pub const STORY_RESPONSE_SENTINEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Chat,
    Story,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Interaction {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub kind: InteractionKind,
    pub timestamp: DateTime<Utc>,
}

/// An interaction about to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewInteraction {
    Chat {
        user_id: String,
        message: String,
        response: String,
    },
    Story {
        user_id: String,
        message: String,
    },
}

impl NewInteraction {
    pub fn kind(&self) -> InteractionKind {
        match self {
            NewInteraction::Chat { .. } => InteractionKind::Chat,
            NewInteraction::Story { .. } => InteractionKind::Story,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            NewInteraction::Chat { user_id, .. } | NewInteraction::Story { user_id, .. } => user_id,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            NewInteraction::Chat { message, .. } | NewInteraction::Story { message, .. } => message,
        }
    }

    pub fn response(&self) -> &str {
        match self {
            NewInteraction::Chat { response, .. } => response,
            NewInteraction::Story { .. } => STORY_RESPONSE_SENTINEL,
        }
    }
}

/// A curated story from the museum collection.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CuratedStory {
    pub title: String,
    pub story: String,
}
