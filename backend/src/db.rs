use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;
use shared::{CreateRsvpRequest, GuestSide, RsvpRecord};

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:rsvps.db";

/// DbConnection manages the RSVP collection
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rsvps (
                id TEXT PRIMARY KEY,
                side TEXT NOT NULL,
                name TEXT NOT NULL,
                phone TEXT NOT NULL,
                attend_count INTEGER NOT NULL,
                message TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Append one RSVP document to the collection.
    /// The store assigns the record id; the caller never supplies one.
    pub async fn insert_rsvp(&self, request: &CreateRsvpRequest) -> Result<RsvpRecord> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO rsvps (id, side, name, phone, attend_count, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(request.side.as_str())
        .bind(&request.name)
        .bind(&request.phone)
        .bind(request.attend_count as i64)
        .bind(&request.message)
        .bind(&request.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(RsvpRecord {
            id,
            side: request.side,
            name: request.name.clone(),
            phone: request.phone.clone(),
            attend_count: request.attend_count,
            message: request.message.clone(),
            created_at: request.created_at.clone(),
        })
    }

    /// List every stored RSVP, oldest first
    pub async fn list_rsvps(&self) -> Result<Vec<RsvpRecord>> {
        let rows = sqlx::query(
            "SELECT id, side, name, phone, attend_count, message, created_at
             FROM rsvps ORDER BY created_at",
        )
        .fetch_all(&*self.pool)
        .await?;

        let rsvps = rows
            .iter()
            .map(|row| RsvpRecord {
                id: row.get("id"),
                side: GuestSide::from_str_or_default(row.get::<&str, _>("side")),
                name: row.get("name"),
                phone: row.get("phone"),
                attend_count: row.get::<i64, _>("attend_count") as u32,
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(rsvps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Setup a new test database for each test
    async fn setup_test() -> DbConnection {
        DbConnection::init_test().await.expect("Failed to create test database")
    }

    fn sample_request(name: &str, created_at: &str) -> CreateRsvpRequest {
        CreateRsvpRequest {
            side: GuestSide::GroomSide,
            name: name.to_string(),
            phone: "010-1234-5678".to_string(),
            attend_count: 2,
            message: Some("축하합니다!".to_string()),
            created_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_rsvp() {
        let db = setup_test().await;

        let record = db
            .insert_rsvp(&sample_request("홍길동", "2025-06-01T12:00:00+09:00"))
            .await
            .expect("Failed to insert RSVP");

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "홍길동");
        assert_eq!(record.attend_count, 2);

        let all = db.list_rsvps().await.expect("Failed to list RSVPs");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], record);
    }

    #[tokio::test]
    async fn test_list_rsvps_empty() {
        let db = setup_test().await;

        let all = db.list_rsvps().await.expect("Failed to list RSVPs");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_list_rsvps_ordered_by_submission_time() {
        let db = setup_test().await;

        db.insert_rsvp(&sample_request("둘째", "2025-06-02T09:00:00+09:00"))
            .await
            .expect("Failed to insert");
        db.insert_rsvp(&sample_request("첫째", "2025-06-01T09:00:00+09:00"))
            .await
            .expect("Failed to insert");

        let all = db.list_rsvps().await.expect("Failed to list RSVPs");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "첫째");
        assert_eq!(all[1].name, "둘째");
    }

    #[tokio::test]
    async fn test_insert_without_message() {
        let db = setup_test().await;

        let request = CreateRsvpRequest {
            message: None,
            ..sample_request("홍길동", "2025-06-01T12:00:00+09:00")
        };
        let record = db.insert_rsvp(&request).await.expect("Failed to insert");

        assert_eq!(record.message, None);
        let all = db.list_rsvps().await.expect("Failed to list RSVPs");
        assert_eq!(all[0].message, None);
    }

    #[tokio::test]
    async fn test_duplicate_submissions_both_stored() {
        // No idempotency key is attached to submissions, so a double click
        // legitimately produces two rows.
        let db = setup_test().await;

        let request = sample_request("홍길동", "2025-06-01T12:00:00+09:00");
        db.insert_rsvp(&request).await.expect("Failed to insert");
        db.insert_rsvp(&request).await.expect("Failed to insert");

        let all = db.list_rsvps().await.expect("Failed to list RSVPs");
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }
}
