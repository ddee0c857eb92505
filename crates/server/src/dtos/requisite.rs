use models::Expr;
use requisite_graph::ChartKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChartRequest {
    /// One of `pre`, `post_partial` or `post_complete`
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "post_complete")]
    pub kind: ChartKind,
    #[serde(default)]
    pub courses: Vec<String>,
    /// Courses already taken; only used by `post_complete`
    #[serde(default)]
    pub secondary: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrerequisitesResponse {
    pub course_id: String,
    /// `null`, a course code, or `{"op": "and" | "or", "args": [...]}`
    #[schema(value_type = Object, nullable)]
    pub prerequisites: Expr,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemainingRequest {
    #[serde(default)]
    pub completed: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemainingResponse {
    pub course_id: String,
    pub satisfied: bool,
    /// What is still required, `null` once satisfied
    #[schema(value_type = Object, nullable)]
    pub remaining: Expr,
}
