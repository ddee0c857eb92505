use utoipa::OpenApi;

/// API Documentation
///
/// Paths are registered by the router.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Requisites", description = "Prerequisite charts and expressions"),
    ),
    info(
        title = "Course Requisites API",
        version = "1.0.0",
        description = "Prerequisite and postrequisite queries over the course catalog",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
