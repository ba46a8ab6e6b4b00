use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub media_item_id: Option<i32>,
    pub media_title: String,
    pub media_type: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_item::Entity",
        from = "Column::MediaItemId",
        to = "super::media_item::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    MediaItem,
}

impl Related<super::media_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
