use serde::Deserialize;

/// Body of a create request.
///
/// No validation beyond shape: a missing title is accepted and stored as
/// absent, exactly as supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
}
