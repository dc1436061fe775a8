use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::{Command, NewCommand};

pub struct CommandService {
    db: SqlitePool,
}

impl CommandService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Insert a command, or replace its value when the channel already has
    /// one with the same trigger. The row id survives replacement.
    pub async fn upsert(&self, channel: &str, cmd: NewCommand) -> Result<Command, sqlx::Error> {
        sqlx::query_as::<_, Command>(
            "INSERT INTO commands (id, channel, command, value)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(channel, command) DO UPDATE SET value = excluded.value
             RETURNING id, channel, command, value",
        )
        .bind(Uuid::now_v7().to_string())
        .bind(channel)
        .bind(&cmd.command)
        .bind(&cmd.value)
        .fetch_one(&self.db)
        .await
    }

    pub async fn list_for_channel(&self, channel: &str) -> Result<Vec<Command>, sqlx::Error> {
        sqlx::query_as::<_, Command>(
            "SELECT id, channel, command, value
             FROM commands
             WHERE channel = ?
             ORDER BY command ASC
             LIMIT 10",
        )
        .bind(channel)
        .fetch_all(&self.db)
        .await
    }

    pub async fn get(&self, channel: &str, command: &str) -> Result<Option<Command>, sqlx::Error> {
        sqlx::query_as::<_, Command>(
            "SELECT id, channel, command, value
             FROM commands
             WHERE channel = ? AND command = ?
             LIMIT 1",
        )
        .bind(channel)
        .bind(command)
        .fetch_optional(&self.db)
        .await
    }

    pub async fn remove(&self, channel: &str, command: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM commands WHERE channel = ? AND command = ?")
            .bind(channel)
            .bind(command)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> CommandService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("create test pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        CommandService::new(pool)
    }

    fn new_command(command: &str, value: &str) -> NewCommand {
        NewCommand {
            command: command.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_stores_a_command() {
        let service = test_service().await;

        let stored = service
            .upsert("#forsen", new_command("!hello", "hi there"))
            .await
            .unwrap();

        assert!(!stored.id.is_empty());
        assert_eq!(stored.channel, "#forsen");
        assert_eq!(stored.command, "!hello");
        assert_eq!(stored.value, "hi there");

        let listed = service.list_for_channel("#forsen").await.unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_value_and_keeps_id() {
        let service = test_service().await;

        let first = service
            .upsert("#forsen", new_command("!hello", "hi there"))
            .await
            .unwrap();
        let second = service
            .upsert("#forsen", new_command("!hello", "hello again"))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.value, "hello again");

        let listed = service.list_for_channel("#forsen").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].value, "hello again");
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_the_channel() {
        let service = test_service().await;

        service
            .upsert("#forsen", new_command("!hello", "hi there"))
            .await
            .unwrap();
        service
            .upsert("#other", new_command("!bye", "see you"))
            .await
            .unwrap();

        let listed = service.list_for_channel("#forsen").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].command, "!hello");
    }

    #[tokio::test]
    async fn test_list_orders_by_trigger_and_caps_at_ten() {
        let service = test_service().await;

        for i in 0..12 {
            service
                .upsert("#forsen", new_command(&format!("!cmd{i:02}"), "value"))
                .await
                .unwrap();
        }

        let listed = service.list_for_channel("#forsen").await.unwrap();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0].command, "!cmd00");
        assert_eq!(listed[9].command, "!cmd09");
    }

    #[tokio::test]
    async fn test_get_returns_none_for_unknown_trigger() {
        let service = test_service().await;

        service
            .upsert("#forsen", new_command("!hello", "hi there"))
            .await
            .unwrap();

        let found = service.get("#forsen", "!hello").await.unwrap();
        assert_eq!(found.map(|c| c.value), Some("hi there".to_string()));

        let missing = service.get("#forsen", "!missing").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_remove_reports_whether_a_row_matched() {
        let service = test_service().await;

        service
            .upsert("#forsen", new_command("!hello", "hi there"))
            .await
            .unwrap();

        assert!(service.remove("#forsen", "!hello").await.unwrap());
        assert!(!service.remove("#forsen", "!hello").await.unwrap());
        assert!(service.list_for_channel("#forsen").await.unwrap().is_empty());
    }
}
