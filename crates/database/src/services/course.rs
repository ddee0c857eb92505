use crate::{entities::courses, error::DatabaseError};
use futures::future::try_join_all;
use log::{error, info};
use models::course_data::RawCourse;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait, sea_query::OnConflict,
};

pub struct CourseService;

impl CourseService {
    /// The number of courses to save in a single batch
    const BATCH_SIZE: usize = 200;

    /// Saves the catalog, replacing any stored course with the same code
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `courses` - The scraped catalog entries
    ///
    /// # Returns
    /// The number of courses saved
    pub async fn save_courses(
        db: &DatabaseConnection,
        courses: Vec<RawCourse>,
    ) -> Result<usize, DatabaseError> {
        let total_courses = courses.len();
        info!(
            "Saving {} courses in batches of {}",
            total_courses,
            Self::BATCH_SIZE
        );

        let batch_futures = courses
            .chunks(Self::BATCH_SIZE)
            .enumerate()
            .map(|(batch_idx, batch)| {
                let db = db.clone();
                let batch_vec = batch.to_vec();

                async move {
                    let result = Self::save_course_batch(&db, batch_vec).await;

                    match &result {
                        Ok(count) => info!(
                            "Completed batch {}/{}, {} courses saved",
                            batch_idx + 1,
                            total_courses.div_ceil(Self::BATCH_SIZE),
                            count
                        ),
                        Err(e) => error!("Error in batch {}: {}", batch_idx + 1, e),
                    }

                    result
                }
            });

        let saved: usize = try_join_all(batch_futures).await?.into_iter().sum();

        info!("Successfully saved all {saved} courses");
        Ok(saved)
    }

    async fn save_course_batch(
        db: &DatabaseConnection,
        courses: Vec<RawCourse>,
    ) -> Result<usize, DatabaseError> {
        let models = courses
            .into_iter()
            .map(Self::course_to_active_model)
            .collect::<Result<Vec<_>, _>>()?;
        let count = models.len();

        if models.is_empty() {
            return Ok(0);
        }

        let txn = db.begin().await?;
        courses::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(courses::Column::Id)
                    .update_columns([
                        courses::Column::Name,
                        courses::Column::Description,
                        courses::Column::Link,
                        courses::Column::Fields,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(count)
    }

    fn course_to_active_model(course: RawCourse) -> Result<courses::ActiveModel, DatabaseError> {
        Ok(courses::ActiveModel {
            fields: Set(serde_json::to_value(&course.fields)?),
            id: Set(course.code),
            name: Set(course.name),
            description: Set(course.description),
            link: Set(course.link),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn raw_course(code: &str) -> RawCourse {
        RawCourse {
            code: code.to_string(),
            name: format!("{code} name"),
            description: String::new(),
            link: String::new(),
            fields: BTreeMap::from([("Prerequisite".to_string(), "CSCA08H3".to_string())]),
        }
    }

    #[test]
    fn test_active_model_carries_fields_as_json() {
        let model = CourseService::course_to_active_model(raw_course("CSCA48H3")).unwrap();
        assert_eq!(model.id.unwrap(), "CSCA48H3");
        assert_eq!(
            model.fields.unwrap(),
            serde_json::json!({ "Prerequisite": "CSCA08H3" })
        );
    }

    #[tokio::test]
    async fn test_save_courses_counts_every_batch() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 200,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let courses = (0..201).map(|i| raw_course(&format!("CSCA{i:02}H3"))).collect();
        assert_eq!(CourseService::save_courses(&db, courses).await.unwrap(), 201);
    }

    #[tokio::test]
    async fn test_save_no_courses() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        assert_eq!(CourseService::save_courses(&db, Vec::new()).await.unwrap(), 0);
    }
}
