use sqlx::postgres::PgPool;
use thiserror::Error;
use tracing::{debug, error, info};

use postbox_types::models::Submission;

/// A connection or insert failure. The cause is logged where it happens;
/// callers map this to a fixed generic message and never show the cause to
/// the submitter.
#[derive(Debug, Error)]
#[error("message store failure: {0}")]
pub struct StoreError(#[from] sqlx::Error);

/// Gateway to the `messages` table.
///
/// Wraps the connection pool built by the surrounding process. `PgPool` is
/// internally reference-counted, so cloning the store shares the same
/// bounded pool.
#[derive(Clone)]
pub struct MessageStore {
    pool: PgPool,
}

impl MessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One-round-trip connectivity probe (`SELECT 1`). Used at startup to
    /// report whether the database is reachable; the caller decides what to
    /// do with a failure.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a validated submission and return the confirmation text.
    ///
    /// A single parameterized insert; the pool hands out a connection for
    /// exactly this statement. No re-validation and no idempotency key:
    /// storing the same submission twice writes two rows.
    pub async fn store(&self, submission: &Submission) -> Result<String, StoreError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO messages (name, email, message) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error saving message: {}", e);
            StoreError(e)
        })?;

        debug!("Message row {} written", id);
        info!("Message saved from {} <{}>", submission.name, submission.email);

        Ok(format!(
            "Thank you, {}! Your message has been saved.",
            submission.name
        ))
    }
}
