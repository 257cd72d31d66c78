use super::present;
use crate::error::AppError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const APPLICATION_REQUIRED: &str = "Company, position, status, and apply date are required";
pub const APPLICATION_NOT_FOUND: &str = "Application not found";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Application {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub status: String,
    pub apply_date: NaiveDate,
    pub follow_up: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
}

impl ApplicationListQuery {
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of both POST /applications and PUT /applications/:id.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub apply_date: Option<String>,
    pub follow_up: Option<String>,
}

/// Every column of an application except the id; written as a whole on insert and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFields {
    pub company: String,
    pub position: String,
    pub status: String,
    pub apply_date: NaiveDate,
    pub follow_up: Option<NaiveDate>,
}

impl ApplicationRequest {
    pub fn validate(self) -> Result<ApplicationFields, AppError> {
        let (Some(company), Some(position), Some(status), Some(apply_date)) = (
            present(self.company),
            present(self.position),
            present(self.status),
            present(self.apply_date),
        ) else {
            return Err(AppError::Validation(APPLICATION_REQUIRED));
        };
        let apply_date = parse_date("apply_date", &apply_date)?;
        let follow_up = present(self.follow_up)
            .map(|s| parse_date("follow_up", &s))
            .transpose()?;
        Ok(ApplicationFields {
            company,
            position,
            status,
            apply_date,
            follow_up,
        })
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is kept).
fn parse_date(field: &str, s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|d| d.date_naive()))
        .map_err(|_| AppError::BadRequest(format!("{field} must be a date (YYYY-MM-DD)")))
}
