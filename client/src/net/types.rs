//! JSON DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend: camelCase for users, snake_case for
//! feedback rows. Optional fields default so older backends keep decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::form::MultipartForm;

/// The signed-in user returned by `GET /api/auth/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub profile_completed: bool,
}

/// Author block embedded in a feedback row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAuthor {
    pub username: String,
}

/// One entry of `GET /api/feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    pub created_at: String,
    pub user: FeedbackAuthor,
}

/// Text fields of `POST /api/feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl FeedbackSubmission {
    /// Multipart field name of the optional screenshot.
    pub const SCREENSHOT_FIELD: &'static str = "screenshot";

    /// Text parts of the multipart upload; the screenshot, if any, is added
    /// by the caller under [`Self::SCREENSHOT_FIELD`].
    pub fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .text("title", self.title.as_str())
            .text("description", self.description.as_str())
            .text("category", self.category.as_str())
    }
}

/// Ordering accepted by the feedback list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackSort {
    #[default]
    New,
    Top,
}

impl FeedbackSort {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Top => "top",
        }
    }
}
