use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MediaType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub media_type: MediaType,
    pub tmdb_id: Option<i32>,
    pub tvdb_id: Option<i32>,
    #[sea_orm(unique)]
    pub sonarr_id: Option<i32>,
    #[sea_orm(unique)]
    pub radarr_id: Option<i32>,
    pub overseerr_request_id: Option<i32>,
    pub requested_by_user_id: Option<i32>,
    pub file_path: Option<String>,
    pub file_size: i64,
    pub added_date: Option<DateTime>,
    pub last_synced_at: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::torrent::Entity")]
    Torrent,
    #[sea_orm(has_many = "super::watch_history::Entity")]
    WatchHistory,
    #[sea_orm(has_many = "super::audit_log::Entity")]
    AuditLog,
}

impl Related<super::torrent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Torrent.def()
    }
}

impl Related<super::watch_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchHistory.def()
    }
}

impl Related<super::audit_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
