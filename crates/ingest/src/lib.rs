//! Command-line ingestion of the course catalog
//!
//! `prerequisites` parses the scraped catalog into prerequisite expressions;
//! `load` writes the catalog and the expressions to the database.

pub mod util;
