use crate::db::DbConnection;
use shared::{CreateRsvpRequest, RsvpRecord, RsvpValidationError};
use thiserror::Error;
use tracing::info;

/// Errors a submission can fail with. Validation failures are the guest's
/// to fix; storage failures are surfaced as a generic notice.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] RsvpValidationError),
    #[error("failed to store RSVP: {0}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for SubmitError {
    fn from(error: anyhow::Error) -> Self {
        SubmitError::Storage(error)
    }
}

/// RsvpService owns the submission rules in front of the record store
#[derive(Clone)]
pub struct RsvpService {
    db: DbConnection,
}

impl RsvpService {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Re-validate an incoming document and append it to the collection.
    /// Exactly one write is attempted per valid request.
    pub async fn submit(&self, request: CreateRsvpRequest) -> Result<RsvpRecord, SubmitError> {
        request.validate()?;

        let record = self.db.insert_rsvp(&request).await?;
        info!(
            "Stored RSVP {} ({}, {} attending)",
            record.id,
            record.side.as_str(),
            record.attend_count
        );
        Ok(record)
    }

    /// All stored RSVPs, oldest first
    pub async fn list(&self) -> Result<Vec<RsvpRecord>, SubmitError> {
        Ok(self.db.list_rsvps().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GuestSide;

    async fn service() -> RsvpService {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        RsvpService::new(db)
    }

    fn valid_request() -> CreateRsvpRequest {
        CreateRsvpRequest {
            side: GuestSide::BrideSide,
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            attend_count: 3,
            message: None,
            created_at: "2025-06-01T12:00:00+09:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_valid_request() {
        let service = service().await;

        let record = service.submit(valid_request()).await.expect("Submit failed");
        assert_eq!(record.name, "홍길동");

        let all = service.list().await.expect("List failed");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_name_without_writing() {
        let service = service().await;

        let request = CreateRsvpRequest {
            name: "  ".to_string(),
            ..valid_request()
        };
        let result = service.submit(request).await;
        assert!(matches!(
            result,
            Err(SubmitError::Validation(RsvpValidationError::EmptyName))
        ));

        // The invalid submission never reached the store
        let all = service.list().await.expect("List failed");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_bad_phone() {
        let service = service().await;

        let request = CreateRsvpRequest {
            phone: "123-4567".to_string(),
            ..valid_request()
        };
        let result = service.submit(request).await;
        assert!(matches!(
            result,
            Err(SubmitError::Validation(RsvpValidationError::InvalidPhone))
        ));
    }
}
