//! # Directory Repository
//!
//! Reference data that bookings point at: users, customers, rooms and
//! services. Only ids and display names live here; the rest of each
//! record is owned by other parts of the application.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crate::queries;

/// Repository for reference-data rows.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    pool: SqlitePool,
}

impl DirectoryRepository {
    /// Creates a new DirectoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DirectoryRepository { pool }
    }

    /// Adds a user and returns the generated id.
    pub async fn add_user(&self, name: &str) -> DbResult<String> {
        self.insert(queries::CREATE_USER, name).await
    }

    /// Adds a customer and returns the generated id.
    pub async fn add_customer(&self, name: &str) -> DbResult<String> {
        self.insert(queries::CREATE_CUSTOMER, name).await
    }

    /// Adds a room and returns the generated id.
    pub async fn add_room(&self, name: &str) -> DbResult<String> {
        self.insert(queries::CREATE_ROOM, name).await
    }

    /// Adds a service and returns the generated id.
    pub async fn add_service(&self, name: &str) -> DbResult<String> {
        self.insert(queries::CREATE_SERVICE, name).await
    }

    pub async fn user_name(&self, id: &str) -> DbResult<Option<String>> {
        self.name_of(queries::GET_USER_NAME, id).await
    }

    pub async fn customer_name(&self, id: &str) -> DbResult<Option<String>> {
        self.name_of(queries::GET_CUSTOMER_NAME, id).await
    }

    pub async fn room_name(&self, id: &str) -> DbResult<Option<String>> {
        self.name_of(queries::GET_ROOM_NAME, id).await
    }

    /// Current name of a service. Booking rows keep their own snapshot.
    pub async fn service_name(&self, id: &str) -> DbResult<Option<String>> {
        self.name_of(queries::GET_SERVICE_NAME, id).await
    }

    async fn insert(&self, query: &'static str, name: &str) -> DbResult<String> {
        let id = Uuid::new_v4().to_string();
        debug!(id = %id, name = %name, "Inserting reference row");

        sqlx::query(query)
            .bind(&id)
            .bind(name)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn name_of(&self, query: &'static str, id: &str) -> DbResult<Option<String>> {
        let name: Option<String> = sqlx::query_scalar(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_add_and_look_up_names() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let dir = db.directory();

        let user = dir.add_user("Sari").await.unwrap();
        let customer = dir.add_customer("PT Maju Jaya").await.unwrap();
        let room = dir.add_room("Deluxe 301").await.unwrap();
        let service = dir.add_service("Extra bed").await.unwrap();

        assert_eq!(dir.user_name(&user).await.unwrap().as_deref(), Some("Sari"));
        assert_eq!(
            dir.customer_name(&customer).await.unwrap().as_deref(),
            Some("PT Maju Jaya")
        );
        assert_eq!(dir.room_name(&room).await.unwrap().as_deref(), Some("Deluxe 301"));
        assert_eq!(
            dir.service_name(&service).await.unwrap().as_deref(),
            Some("Extra bed")
        );
    }

    #[tokio::test]
    async fn test_unknown_id_has_no_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.directory().user_name("nobody").await.unwrap(), None);
    }
}
