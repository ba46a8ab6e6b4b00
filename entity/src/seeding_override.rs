use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seeding_override")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tracker_id: Option<i32>,
    pub tracker_name: Option<String>,
    pub min_seeding_time_seconds: Option<i64>,
    pub min_ratio: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
