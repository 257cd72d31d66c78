use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

pub const COMMENT_REQUIRED: &str = "Post ID and text are required";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub text: String,
}

/// `post_id` is accepted as a JSON number or a numeric string.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: Option<Value>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i32,
    pub text: String,
}

impl CreateCommentRequest {
    pub fn validate(self) -> Result<NewComment, AppError> {
        let post_id = match self.post_id {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(v) => Some(parse_post_id(&v)?),
        };
        // 0 is treated like a missing id.
        let post_id = post_id.filter(|id| *id != 0);
        let text = super::present(self.text);
        match (post_id, text) {
            (Some(post_id), Some(text)) => Ok(NewComment { post_id, text }),
            _ => Err(AppError::Validation(COMMENT_REQUIRED)),
        }
    }
}

fn parse_post_id(v: &Value) -> Result<i32, AppError> {
    let n = match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    n.and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::BadRequest("post_id must be an integer".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(v: Value) -> Result<NewComment, AppError> {
        serde_json::from_value::<CreateCommentRequest>(v).unwrap().validate()
    }

    #[test]
    fn accepts_number_or_numeric_string() {
        assert_eq!(
            validate(json!({ "post_id": 3, "text": "nice" })).unwrap(),
            NewComment { post_id: 3, text: "nice".into() }
        );
        assert_eq!(validate(json!({ "post_id": "42", "text": "x" })).unwrap().post_id, 42);
    }

    #[test]
    fn missing_fields_rejected() {
        for body in [
            json!({ "text": "x" }),
            json!({ "post_id": 1 }),
            json!({ "post_id": 0, "text": "x" }),
            json!({ "post_id": "", "text": "x" }),
            json!({ "post_id": 1, "text": "" }),
        ] {
            assert!(matches!(validate(body), Err(AppError::Validation(COMMENT_REQUIRED))));
        }
    }

    #[test]
    fn malformed_post_id_is_bad_request() {
        for body in [
            json!({ "post_id": "abc", "text": "x" }),
            json!({ "post_id": 1.5, "text": "x" }),
            json!({ "post_id": [1], "text": "x" }),
            json!({ "post_id": 9_999_999_999i64, "text": "x" }),
        ] {
            assert!(matches!(validate(body), Err(AppError::BadRequest(_))));
        }
    }
}
