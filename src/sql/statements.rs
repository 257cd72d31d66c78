//! Statement text for every endpoint. Column lists are spelled out so rows decode into the typed models.

/// Post columns plus the inlined text of its comments. Shared prefix of both listing variants.
macro_rules! post_listing {
    ($where:literal) => {
        concat!(
            "SELECT p.id, p.title, p.content, p.tags, p.date, ",
            "ARRAY(SELECT c.text FROM comments c WHERE c.post_id = p.id) AS comments ",
            "FROM posts p ",
            $where,
            "ORDER BY p.date DESC"
        )
    };
}

macro_rules! application_listing {
    ($where:literal) => {
        concat!(
            "SELECT id, company, position, status, apply_date, follow_up FROM applications ",
            $where,
            "ORDER BY apply_date DESC"
        )
    };
}

pub const LIST_POSTS: &str = post_listing!("");

/// `$1` is a JSON value; matches posts whose `tags` array holds it as an element (JSONB containment).
pub const LIST_POSTS_BY_TAG: &str = post_listing!("WHERE p.tags @> jsonb_build_array($1::jsonb) ");

pub const INSERT_POST: &str =
    "INSERT INTO posts (title, content, tags) VALUES ($1, $2, $3::jsonb) RETURNING id, title, content, tags, date";

pub const INSERT_COMMENT: &str = "INSERT INTO comments (post_id, text) VALUES ($1, $2) RETURNING id, post_id, text";

pub const LIST_APPLICATIONS: &str = application_listing!("");

pub const LIST_APPLICATIONS_BY_STATUS: &str = application_listing!("WHERE status = $1 ");

pub const INSERT_APPLICATION: &str = "INSERT INTO applications (company, position, status, apply_date, follow_up) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, company, position, status, apply_date, follow_up";

pub const UPDATE_APPLICATION: &str = "UPDATE applications \
     SET company = $1, position = $2, status = $3, apply_date = $4, follow_up = $5 \
     WHERE id = $6 \
     RETURNING id, company, position, status, apply_date, follow_up";

pub const DELETE_APPLICATION: &str = "DELETE FROM applications WHERE id = $1";

/// Statement for GET /posts.
pub fn list_posts(tag: Option<&str>) -> &'static str {
    match tag {
        Some(_) => LIST_POSTS_BY_TAG,
        None => LIST_POSTS,
    }
}

/// Statement for GET /applications.
pub fn list_applications(status: Option<&str>) -> &'static str {
    match status {
        Some(_) => LIST_APPLICATIONS_BY_STATUS,
        None => LIST_APPLICATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_variants_differ_only_by_filter() {
        assert_eq!(list_posts(None), LIST_POSTS);
        assert_eq!(list_posts(Some("rust")), LIST_POSTS_BY_TAG);
        assert!(!LIST_POSTS.contains("$1"));
        assert!(LIST_POSTS_BY_TAG.contains("WHERE p.tags @> jsonb_build_array($1::jsonb) ORDER BY p.date DESC"));

        assert_eq!(list_applications(None), LIST_APPLICATIONS);
        assert_eq!(list_applications(Some("applied")), LIST_APPLICATIONS_BY_STATUS);
        assert!(LIST_APPLICATIONS.ends_with("FROM applications ORDER BY apply_date DESC"));
        assert!(LIST_APPLICATIONS_BY_STATUS.ends_with("WHERE status = $1 ORDER BY apply_date DESC"));
    }

    #[test]
    fn posts_are_listed_newest_first_with_comments() {
        assert!(LIST_POSTS.contains("AS comments"));
        assert!(LIST_POSTS.ends_with("ORDER BY p.date DESC"));
    }

    #[test]
    fn update_binds_id_last() {
        assert!(UPDATE_APPLICATION.contains("WHERE id = $6"));
        assert_eq!(UPDATE_APPLICATION.matches('$').count(), 6);
    }
}
