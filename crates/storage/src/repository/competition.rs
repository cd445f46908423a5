use sqlx::PgPool;

use crate::dto::competition::CreateCompetitionRequest;
use crate::error::{Result, StorageError};
use crate::models::Competition;

const COMPETITION_COLUMNS: &str =
    "id, name, location, starts_on, registration_open, created_at";

pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all competitions, newest first.
    pub async fn list(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {} FROM competitions ORDER BY starts_on DESC, created_at DESC",
            COMPETITION_COLUMNS
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {} FROM competitions WHERE id = $1",
            COMPETITION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            r#"
            INSERT INTO competitions (name, location, starts_on, registration_open)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            COMPETITION_COLUMNS
        ))
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.starts_on)
        .bind(req.registration_open)
        .fetch_one(self.pool)
        .await?;

        Ok(competition)
    }

    /// Delete a competition. Activities cascade, but orders keep their
    /// competition row alive; that surfaces as a constraint violation.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM competitions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(StorageError::from)
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Competition has registered orders".to_string(),
                    )
                } else {
                    e
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
