use crate::{
    dtos::requisite::{
        ChartRequest, PrerequisitesResponse, RemainingRequest, RemainingResponse,
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use models::{AdjacencyTree, course_data::is_course_code};
use requisite_graph::{RequisiteStore, requisite_chart};
use std::collections::{BTreeMap, HashSet};

/// Builds a prerequisite or postrequisite chart for a set of courses
#[utoipa::path(
    post,
    path = "/api/course_chart",
    request_body = ChartRequest,
    responses(
        (status = 200, description = "Adjacency list of the chart, dangling edges removed", body = BTreeMap<String, Vec<String>>),
        (status = 422, description = "Malformed request body"),
        (status = 503, description = "Chart took too long to build")
    ),
    tag = "Requisites"
)]
pub async fn course_chart(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<AdjacencyTree>, ApiError> {
    let tree = state
        .query(move |catalog| {
            requisite_chart(catalog, request.kind, &request.courses, &request.secondary)
        })
        .await?;

    Ok(Json(tree))
}

/// Get the prerequisite expression of a course
#[utoipa::path(
    get,
    path = "/courses/{id}/prerequisites",
    params(("id" = String, Path, description = "Course code, e.g. CSCB07H3")),
    responses(
        (status = 200, description = "Prerequisites retrieved successfully", body = PrerequisitesResponse),
        (status = 400, description = "Not a course code")
    ),
    tag = "Requisites"
)]
pub async fn get_prerequisites(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<PrerequisitesResponse>, ApiError> {
    if !is_course_code(&course_id) {
        return Err(ApiError::InvalidCourseCode(course_id));
    }

    let prerequisites = state.catalog.get_course_prereqs(&course_id);
    Ok(Json(PrerequisitesResponse {
        course_id,
        prerequisites,
    }))
}

/// Reduce the prerequisites of a course by the courses already completed
#[utoipa::path(
    post,
    path = "/courses/{id}/remaining",
    params(("id" = String, Path, description = "Course code, e.g. CSCB07H3")),
    request_body = RemainingRequest,
    responses(
        (status = 200, description = "Remaining requirements", body = RemainingResponse),
        (status = 400, description = "Not a course code")
    ),
    tag = "Requisites"
)]
pub async fn remaining(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(request): Json<RemainingRequest>,
) -> Result<Json<RemainingResponse>, ApiError> {
    if !is_course_code(&course_id) {
        return Err(ApiError::InvalidCourseCode(course_id));
    }

    let completed: HashSet<String> = request.completed.into_iter().collect();
    let remaining = state
        .catalog
        .get_course_prereqs(&course_id)
        .simplify(&completed);

    Ok(Json(RemainingResponse {
        course_id,
        satisfied: remaining.is_empty(),
        remaining,
    }))
}
