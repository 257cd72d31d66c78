//! Job applications: listing, insert, full replace and delete.

use crate::error::AppError;
use crate::models::{Application, ApplicationFields};
use crate::sql;
use sqlx::PgPool;

pub struct ApplicationService;

impl ApplicationService {
    /// Most recent `apply_date` first, optionally restricted to one exact `status`.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Application>, AppError> {
        let stmt = sql::list_applications(status);
        tracing::debug!(sql = %stmt, status = ?status, "query");
        let query = sqlx::query_as::<_, Application>(stmt);
        let rows = match status {
            Some(status) => query.bind(status).fetch_all(pool).await?,
            None => query.fetch_all(pool).await?,
        };
        Ok(rows)
    }

    pub async fn create(pool: &PgPool, fields: &ApplicationFields) -> Result<Application, AppError> {
        tracing::debug!(sql = %sql::INSERT_APPLICATION, company = %fields.company, "query");
        let row = sqlx::query_as::<_, Application>(sql::INSERT_APPLICATION)
            .bind(&fields.company)
            .bind(&fields.position)
            .bind(&fields.status)
            .bind(fields.apply_date)
            .bind(fields.follow_up)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Overwrites every column of row `id`. Returns None when no row has that id.
    pub async fn replace(
        pool: &PgPool,
        id: i64,
        fields: &ApplicationFields,
    ) -> Result<Option<Application>, AppError> {
        tracing::debug!(sql = %sql::UPDATE_APPLICATION, id, "query");
        let row = sqlx::query_as::<_, Application>(sql::UPDATE_APPLICATION)
            .bind(&fields.company)
            .bind(&fields.position)
            .bind(&fields.status)
            .bind(fields.apply_date)
            .bind(fields.follow_up)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Returns false when no row had that id.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %sql::DELETE_APPLICATION, id, "query");
        let result = sqlx::query(sql::DELETE_APPLICATION).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
