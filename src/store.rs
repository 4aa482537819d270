use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::models::UserData;

pub const STORAGE_KEY: &str = "cycleAppData";

#[derive(Clone)]
pub struct UserDataStore {
    pool: SqlitePool,
}

impl UserDataStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(UserDataStore { pool })
    }

    async fn read_raw(&self) -> Result<Option<String>> {
        let raw = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(STORAGE_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("❌ DB read failed: {}", e);
                e
            })?;
        Ok(raw)
    }

    /// Loads the stored document. A document that no longer parses is
    /// reported and treated as absent, which routes the user to onboarding.
    pub async fn load(&self) -> Result<Option<UserData>> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                tracing::warn!("⚠️ Stored user data is malformed, ignoring it: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn save(&self, data: &UserData) -> Result<()> {
        let value = serde_json::to_string(data)?;
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        )
        .bind(STORAGE_KEY)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("❌ DB write failed: {}", e);
            e
        })?;

        tracing::debug!("💾 User data saved");
        Ok(())
    }

    /// Deletes the document. Returns whether anything was removed.
    pub async fn clear(&self) -> Result<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(STORAGE_KEY)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[cfg(test)]
    pub async fn write_raw(&self, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)")
            .bind(STORAGE_KEY)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// In-memory store for tests. One connection, or each pooled connection
/// would open its own empty database.
#[cfg(test)]
pub async fn memory_store() -> UserDataStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    UserDataStore::with_pool(pool)
        .await
        .expect("Failed to run migrations")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyLog, Level, Mood, Profile};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample() -> UserData {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut data = UserData::onboard(Profile {
            last_period_start: Some(start),
            last_period_end: NaiveDate::from_ymd_opt(2025, 5, 5),
            average_cycle_length: 30,
            average_period_length: 5,
            is_irregular: true,
            created_at: Some(Utc.with_ymd_and_hms(2025, 5, 6, 9, 30, 0).unwrap()),
        });
        data.daily_logs.insert(
            NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
            DailyLog {
                sleep: Some(6.5),
                mood: Mood::Great,
                energy: Level::High,
                stress: Level::Medium,
                workout: None,
                fasting_window: Some("16:8".into()),
                notes: Some("long walk".into()),
                timestamp: Some(Utc.with_ymd_and_hms(2025, 5, 7, 21, 0, 0).unwrap()),
            },
        );
        data
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let store = memory_store().await;
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_is_identical() {
        let store = memory_store().await;
        let data = sample();
        store.save(&data).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(data.clone()));

        // Second save replaces rather than duplicates.
        let mut changed = data;
        changed.profile.average_cycle_length = 32;
        store.save(&changed).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_malformed_document_reads_as_missing() {
        let store = memory_store().await;
        store.write_raw("{not json").await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(store.read_raw().await.unwrap().as_deref(), Some("{not json"));
    }

    #[tokio::test]
    async fn test_clear_removes_document() {
        let store = memory_store().await;
        store.save(&sample()).await.unwrap();
        assert!(store.clear().await.unwrap());
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!store.clear().await.unwrap());
    }
}
