use crate::{
    entities::{course_pre_post_reqs, course_prereqs},
    error::DatabaseError,
};
use log::{info, warn};
use models::{Expr, course_data::CoursePrereqs};
use requisite_graph::RequisiteCatalog;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    IntoActiveModel, TransactionTrait,
};

pub struct RequisiteService;

impl RequisiteService {
    /// The number of rows to insert in a single statement
    const BATCH_SIZE: usize = 200;

    /// Replaces every stored prerequisite expression and edge
    ///
    /// Courses whose expression reduced to nothing get no row. The whole
    /// replacement runs in one transaction so readers never see a mix of two
    /// ingestions.
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `records` - The parsed prerequisites of every course
    ///
    /// # Returns
    /// The number of expressions stored
    pub async fn save_prerequisites(
        db: &DatabaseConnection,
        records: Vec<CoursePrereqs>,
    ) -> Result<usize, DatabaseError> {
        let mut expressions = Vec::new();
        let mut edges = Vec::new();

        for record in records.into_iter().filter(|r| !r.prereqs.is_empty()) {
            for prereq in record.prereqs.courses() {
                edges.push(course_pre_post_reqs::ActiveModel {
                    postreq_id: Set(record.code.clone()),
                    prereq_id: Set(prereq.to_owned()),
                });
            }
            expressions.push(course_prereqs::ActiveModel {
                prereqs: Set(serde_json::to_value(&record.prereqs)?),
                course_id: Set(record.code),
            });
        }

        let stored = expressions.len();
        let edge_count = edges.len();

        let txn = db.begin().await?;
        course_pre_post_reqs::Entity::delete_many().exec(&txn).await?;
        course_prereqs::Entity::delete_many().exec(&txn).await?;
        Self::insert_batches::<course_prereqs::Entity, _>(&txn, expressions).await?;
        Self::insert_batches::<course_pre_post_reqs::Entity, _>(&txn, edges).await?;
        txn.commit().await?;

        info!("Saved {stored} prerequisite expressions and {edge_count} edges");
        Ok(stored)
    }

    async fn insert_batches<E, C>(db: &C, models: Vec<E::ActiveModel>) -> Result<(), DatabaseError>
    where
        E: EntityTrait,
        E::Model: IntoActiveModel<E::ActiveModel>,
        C: ConnectionTrait,
    {
        let mut models = models.into_iter().peekable();
        while models.peek().is_some() {
            let batch: Vec<_> = models.by_ref().take(Self::BATCH_SIZE).collect();
            E::insert_many(batch).exec_without_returning(db).await?;
        }
        Ok(())
    }

    /// Loads every stored expression into an in-memory catalog
    ///
    /// Edges are rederived from the expressions rather than read back.
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `tolerate_malformed` - Treat expressions that fail to deserialize as
    ///   empty instead of failing
    pub async fn load_catalog(
        db: &DatabaseConnection,
        tolerate_malformed: bool,
    ) -> Result<RequisiteCatalog, DatabaseError> {
        let rows = course_prereqs::Entity::find().all(db).await?;
        let mut catalog = RequisiteCatalog::new();

        for row in rows {
            let prereqs = match serde_json::from_value::<Expr>(row.prereqs) {
                Ok(prereqs) => prereqs,
                Err(source) if tolerate_malformed => {
                    warn!(
                        "Ignoring malformed prerequisites of {}: {}",
                        row.course_id, source
                    );
                    Expr::Empty
                }
                Err(source) => {
                    return Err(DatabaseError::MalformedExpression {
                        course: row.course_id,
                        source,
                    });
                }
            };
            catalog.insert(row.course_id, prereqs);
        }

        info!(
            "Loaded prerequisites of {} courses ({} edges)",
            catalog.len(),
            catalog.edge_count()
        );
        Ok(catalog)
    }

    /// Counts the stored prerequisite edges
    pub async fn count_edges(db: &DatabaseConnection) -> Result<u64, DatabaseError> {
        Ok(course_pre_post_reqs::Entity::find().count(db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use requisite_graph::RequisiteStore;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn row(course_id: &str, prereqs: serde_json::Value) -> course_prereqs::Model {
        course_prereqs::Model {
            course_id: course_id.to_string(),
            prereqs,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_load_catalog_rederives_edges() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(
                    "CSCB07H3",
                    json!({ "op": "or", "args": ["CSCA48H3", "CSCA08H3"] }),
                ),
                row("CSCC01H3", json!("CSCB07H3")),
            ]])
            .into_connection();

        let catalog = RequisiteService::load_catalog(&db, false).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.edge_count(), 3);
        assert_eq!(
            catalog.get_postreq_courses("CSCB07H3"),
            vec!["CSCC01H3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_malformed_expression_is_an_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("CSCB07H3", json!({ "op": "xor", "args": [] }))]])
            .into_connection();

        match RequisiteService::load_catalog(&db, false).await {
            Err(DatabaseError::MalformedExpression { course, .. }) => {
                assert_eq!(course, "CSCB07H3")
            }
            other => panic!("expected a malformed expression, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsatisfiable_node_is_malformed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("CSCC01H3", json!({ "op": "or", "args": [] }))]])
            .into_connection();

        assert!(matches!(
            RequisiteService::load_catalog(&db, false).await,
            Err(DatabaseError::MalformedExpression { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_expression_tolerated_as_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("CSCB07H3", json!(42)),
                row("CSCC01H3", json!("CSCB07H3")),
                row("CSCD01H3", json!({ "op": "and", "args": [null, "CSCC01H3"] })),
            ]])
            .into_connection();

        let catalog = RequisiteService::load_catalog(&db, true).await.unwrap();
        assert_eq!(catalog.get_course_prereqs("CSCB07H3"), Expr::Empty);
        assert_eq!(catalog.get_course_prereqs("CSCD01H3"), Expr::Empty);
        assert_eq!(catalog.edge_count(), 1);
    }

    #[tokio::test]
    async fn test_save_prerequisites_skips_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0), exec(0), exec(1), exec(2)])
            .into_connection();

        let records = vec![
            CoursePrereqs {
                code: "CSCB36H3".to_string(),
                prereqs: Expr::And(vec![
                    Expr::Course("CSCA67H3".to_string()),
                    Expr::Course("MATA22H3".to_string()),
                ]),
            },
            CoursePrereqs {
                code: "CSCA08H3".to_string(),
                prereqs: Expr::Empty,
            },
        ];

        assert_eq!(
            RequisiteService::save_prerequisites(&db, records).await.unwrap(),
            1
        );
    }
}
