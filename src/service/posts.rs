//! Posts and their comments.

use crate::error::AppError;
use crate::models::{Comment, NewComment, NewPost, Post, PostWithComments};
use crate::sql;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

pub struct PostService;

impl PostService {
    /// Newest first, each with its comments' text. `tag` keeps posts whose tags contain it.
    pub async fn list(pool: &PgPool, tag: Option<&str>) -> Result<Vec<PostWithComments>, AppError> {
        let stmt = sql::list_posts(tag);
        tracing::debug!(sql = %stmt, tag = ?tag, "query");
        let query = sqlx::query_as::<_, PostWithComments>(stmt);
        let rows = match tag {
            Some(tag) => query.bind(Value::String(tag.to_string())).fetch_all(pool).await?,
            None => query.fetch_all(pool).await?,
        };
        Ok(rows)
    }

    pub async fn create(pool: &PgPool, post: &NewPost) -> Result<Post, AppError> {
        tracing::debug!(sql = %sql::INSERT_POST, title = %post.title, "query");
        let row = sqlx::query_as::<_, Post>(sql::INSERT_POST)
            .bind(&post.title)
            .bind(&post.content)
            .bind(Json(&post.tags))
            .fetch_one(pool)
            .await?;
        Ok(row)
    }
}

pub struct CommentService;

impl CommentService {
    /// Parent post existence is left to the schema's foreign key.
    pub async fn create(pool: &PgPool, comment: &NewComment) -> Result<Comment, AppError> {
        tracing::debug!(sql = %sql::INSERT_COMMENT, post_id = comment.post_id, "query");
        let row = sqlx::query_as::<_, Comment>(sql::INSERT_COMMENT)
            .bind(comment.post_id)
            .bind(&comment.text)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }
}
