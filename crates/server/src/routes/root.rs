use axum::http::StatusCode;

/// Root endpoint, answers "OK" so load balancers can probe `/`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
