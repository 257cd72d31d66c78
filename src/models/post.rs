use super::present;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

pub const POST_REQUIRED: &str = "Title and content are required";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub tags: Json<Vec<Value>>,
    pub date: DateTime<Utc>,
}

/// A post as listed: the row plus the text of each of its comments.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostWithComments {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostListQuery {
    pub tag: Option<String>,
}

impl PostListQuery {
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<Value>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, AppError> {
        match (present(self.title), present(self.content)) {
            (Some(title), Some(content)) => Ok(NewPost {
                title,
                content,
                tags: self.tags.unwrap_or_default(),
            }),
            _ => Err(AppError::Validation(POST_REQUIRED)),
        }
    }
}
