use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// Longest title the `posts.title` column accepts, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Post entity - the single resource managed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Replace the title and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn retitle(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// A post that has not been persisted yet. The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
}

impl NewPost {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

/// Validate a submitted title and return the value to store.
///
/// Surrounding whitespace is trimmed first; a missing or blank title is
/// rejected, as is one longer than [`TITLE_MAX_CHARS`].
pub fn validate_title(title: Option<&str>) -> Result<String, ValidationErrors> {
    let title = title.map(str::trim).unwrap_or_default();

    if title.is_empty() {
        return Err(ValidationErrors::single(
            "title",
            "The title field is required.",
        ));
    }

    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationErrors::single(
            "title",
            format!("The title may not be greater than {TITLE_MAX_CHARS} characters."),
        ));
    }

    Ok(title.to_string())
}
