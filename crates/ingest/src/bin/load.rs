use anyhow::Context;
use clap::Parser;
use database::{
    db::create_connection,
    services::{CourseService, RequisiteService},
};
use ingest::util::{DEFAULT_OUTPUT_DIR, read_json};
use log::info;
use migration::{Migrator, MigratorTrait};
use models::course_data::{CoursePrereqs, RawCourse};
use std::path::{Path, PathBuf};

/// Loads the catalog and its parsed prerequisites into the database
#[derive(Debug, Parser)]
struct Args {
    /// Scraped catalog, a JSON array of courses
    #[arg(long, default_value_os_t = Path::new(DEFAULT_OUTPUT_DIR).join("courses.json"))]
    courses: PathBuf,

    /// Output of the `prerequisites` command
    #[arg(long, default_value_os_t = Path::new(DEFAULT_OUTPUT_DIR).join("prerequisites.json"))]
    prerequisites: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let courses: Vec<RawCourse> = read_json(&args.courses).context("Failed to read the catalog")?;
    let prereqs: Vec<CoursePrereqs> =
        read_json(&args.prerequisites).context("Failed to read the prerequisites")?;

    let db = create_connection()
        .await
        .context("Failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    // Expressions reference their course row
    CourseService::save_courses(&db, courses).await?;
    RequisiteService::save_prerequisites(&db, prereqs).await?;

    info!("Database load complete");
    Ok(())
}
