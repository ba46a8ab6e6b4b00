use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TrackerType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "torrent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub media_item_id: Option<i32>,
    #[sea_orm(unique)]
    pub hash: String,
    pub name: String,
    pub content_path: Option<String>,
    pub tracker_id: Option<i32>,
    pub tracker_name: Option<String>,
    pub tracker_type: TrackerType,
    pub added_date: Option<DateTime>,
    pub seeding_time_seconds: i64,
    pub upload_bytes: i64,
    pub download_bytes: i64,
    pub ratio: f64,
    pub seeding_required_seconds: Option<i64>,
    pub seeding_required_ratio: Option<f64>,
    pub is_seeding: bool,
    pub last_synced_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_item::Entity",
        from = "Column::MediaItemId",
        to = "super::media_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MediaItem,
}

impl Related<super::media_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
