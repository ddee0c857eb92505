use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).char_len(8).not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::Link).string().not_null())
                    .col(ColumnDef::new(Courses::Fields).json().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_prereqs table, one reduced expression per course
        manager
            .create_table(
                Table::create()
                    .table(CoursePrereqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursePrereqs::CourseId)
                            .char_len(8)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoursePrereqs::Prereqs).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_prereqs-course_id")
                            .from(CoursePrereqs::Table, CoursePrereqs::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_pre_post_reqs edge table
        // prereq_id has no foreign key: expressions may name retired courses
        manager
            .create_table(
                Table::create()
                    .table(CoursePrePostReqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursePrePostReqs::PostreqId)
                            .char_len(8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CoursePrePostReqs::PrereqId)
                            .char_len(8)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CoursePrePostReqs::PostreqId)
                            .col(CoursePrePostReqs::PrereqId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_pre_post_reqs-postreq_id")
                            .from(CoursePrePostReqs::Table, CoursePrePostReqs::PostreqId)
                            .to(CoursePrereqs::Table, CoursePrereqs::CourseId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CoursePrePostReqs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CoursePrereqs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    Description,
    Link,
    Fields,
}

#[derive(Iden)]
enum CoursePrereqs {
    Table,
    CourseId,
    Prereqs,
}

#[derive(Iden)]
enum CoursePrePostReqs {
    Table,
    PostreqId,
    PrereqId,
}
