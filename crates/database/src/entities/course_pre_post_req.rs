use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A flattened prerequisite edge: `prereq_id` appears in the expression of
/// `postreq_id`
///
/// `prereq_id` may name a course missing from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_pre_post_reqs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub postreq_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub prereq_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
