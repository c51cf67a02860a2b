use std::sync::Arc;

use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

use super::model::{CuratedStory, Interaction, InteractionKind, NewInteraction};

pub static INTERACTIONS_MIGRATOR: Migrator = sqlx::migrate!("./migrations/interactions");
pub static STORIES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/stories");

#[derive(Clone)]
pub struct InteractionRepository {
    pub pool: Arc<SqlitePool>,
}

impl InteractionRepository {
    /// Appends one interaction stamped with the current time and returns its row id.
    pub async fn record(&self, interaction: &NewInteraction) -> sqlx::Result<i64> {
        let id = sqlx::query(
            r#"
            INSERT INTO interactions (user_id, message, response, kind, timestamp)
            VALUES (?, ?, ?, ?, ?);
            "#,
        )
        .bind(interaction.user_id())
        .bind(interaction.message())
        .bind(interaction.response())
        .bind(interaction.kind())
        .bind(Utc::now())
        .execute(&*self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(id, kind = ?interaction.kind(), "recorded interaction");
        Ok(id)
    }

    pub async fn fetch_user_stories(&self) -> sqlx::Result<Vec<Interaction>> {
        self.fetch_by_kind(InteractionKind::Story).await
    }

    #[cfg(test)]
    pub async fn fetch_chats(&self) -> sqlx::Result<Vec<Interaction>> {
        self.fetch_by_kind(InteractionKind::Chat).await
    }

    async fn fetch_by_kind(&self, kind: InteractionKind) -> sqlx::Result<Vec<Interaction>> {
        sqlx::query_as::<_, Interaction>(
            r#"
            SELECT rowid AS id,
                   COALESCE(user_id, '') AS user_id,
                   COALESCE(message, '') AS message,
                   COALESCE(response, '') AS response,
                   kind,
                   timestamp
            FROM interactions
            WHERE kind = ?
            ORDER BY rowid;
            "#,
        )
        .bind(kind)
        .fetch_all(&*self.pool)
        .await
    }
}

#[derive(Clone)]
pub struct StoryRepository {
    pub pool: Arc<SqlitePool>,
}

impl StoryRepository {
    pub async fn fetch_stories(&self) -> sqlx::Result<Vec<CuratedStory>> {
        sqlx::query_as::<_, CuratedStory>(
            "SELECT title, story FROM upstander_stories ORDER BY rowid",
        )
        .fetch_all(&*self.pool)
        .await
    }
}
