use sqlx::SqlitePool;

use super::model::ChannelInfo;

pub struct ChannelService {
    db: SqlitePool,
}

impl ChannelService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ChannelInfo>, sqlx::Error> {
        sqlx::query_as::<_, ChannelInfo>(
            "SELECT channel, COUNT(*) AS commands
             FROM commands
             GROUP BY channel
             ORDER BY channel ASC",
        )
        .fetch_all(&self.db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::model::NewCommand;
    use crate::command::service::CommandService;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("create test pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        pool
    }

    #[tokio::test]
    async fn test_list_counts_commands_per_channel() {
        let pool = test_pool().await;
        let commands = CommandService::new(pool.clone());

        for (channel, command) in [
            ("#forsen", "!hello"),
            ("#forsen", "!bye"),
            ("#other", "!hello"),
        ] {
            commands
                .upsert(
                    channel,
                    NewCommand {
                        command: command.to_string(),
                        value: "value".to_string(),
                    },
                )
                .await
                .unwrap();
        }

        let listed = ChannelService::new(pool).list().await.unwrap();
        assert_eq!(
            listed,
            vec![
                ChannelInfo {
                    channel: "#forsen".to_string(),
                    commands: 2,
                },
                ChannelInfo {
                    channel: "#other".to_string(),
                    commands: 1,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_is_empty_without_commands() {
        let pool = test_pool().await;
        let listed = ChannelService::new(pool).list().await.unwrap();
        assert!(listed.is_empty());
    }
}
