use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postrequisite lookups filter on prereq_id alone
        manager
            .create_index(
                Index::create()
                    .name("idx_course_pre_post_reqs_prereq_id")
                    .table(CoursePrePostReqs::Table)
                    .col(CoursePrePostReqs::PrereqId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_pre_post_reqs_prereq_id")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum CoursePrePostReqs {
    Table,
    PrereqId,
}
