use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    /// Every catalog field of the course, keyed by field name
    pub fields: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::course_prereq::Entity")]
    CoursePrereq,
}

impl Related<super::course_prereq::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePrereq.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
