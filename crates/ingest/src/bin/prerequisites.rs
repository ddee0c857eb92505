use anyhow::Context;
use clap::Parser;
use ingest::util::{DEFAULT_OUTPUT_DIR, read_json, write_json};
use log::{info, warn};
use models::course_data::RawCourse;
use std::path::{Path, PathBuf};

/// Parses the prerequisites of every scraped course into expressions
#[derive(Debug, Parser)]
struct Args {
    /// Scraped catalog, a JSON array of courses
    #[arg(long, default_value_os_t = Path::new(DEFAULT_OUTPUT_DIR).join("courses.json"))]
    input: PathBuf,

    /// Where to write the parsed expressions
    #[arg(long, default_value_os_t = Path::new(DEFAULT_OUTPUT_DIR).join("prerequisites.json"))]
    output: PathBuf,

    /// Department prefixes to keep; every course when omitted
    #[arg(long = "prefix", value_name = "PREFIX")]
    prefixes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let courses: Vec<RawCourse> = read_json(&args.input).context("Failed to read the catalog")?;
    info!("Read {} courses from {}", courses.len(), args.input.display());

    let report = requisite_parser::ingest(&courses, &args.prefixes);
    for failure in &report.failures {
        warn!(
            "Failed to parse prerequisites of {} ({:?}): {}",
            failure.code, failure.text, failure.error
        );
    }

    write_json(&args.output, &report.parsed).context("Failed to write the prerequisites")?;
    info!(
        "Parsed prerequisites of {} courses into {}, {} failures",
        report.parsed.len(),
        args.output.display(),
        report.failures.len()
    );

    Ok(())
}
