use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::db::SeedingOverrideModel, util::time};

/// Operator-supplied requirement for one tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedingOverrideInput {
    pub tracker_id: Option<i32>,
    pub tracker_name: Option<String>,
    pub min_seeding_time_seconds: Option<i64>,
    pub min_ratio: Option<f64>,
}

pub struct SeedingOverrideRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeedingOverrideRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: SeedingOverrideInput) -> Result<SeedingOverrideModel, DbErr> {
        let now = time::now();

        entity::seeding_override::ActiveModel {
            tracker_id: ActiveValue::Set(input.tracker_id),
            tracker_name: ActiveValue::Set(input.tracker_name),
            min_seeding_time_seconds: ActiveValue::Set(input.min_seeding_time_seconds),
            min_ratio: ActiveValue::Set(input.min_ratio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces the requirement fields of an existing override.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated override
    /// - `Ok(None)` - No override with that ID
    pub async fn update(
        &self,
        id: i32,
        input: SeedingOverrideInput,
    ) -> Result<Option<SeedingOverrideModel>, DbErr> {
        let Some(existing) = entity::prelude::SeedingOverride::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: entity::seeding_override::ActiveModel = existing.into();
        model.tracker_id = ActiveValue::Set(input.tracker_id);
        model.tracker_name = ActiveValue::Set(input.tracker_name);
        model.min_seeding_time_seconds = ActiveValue::Set(input.min_seeding_time_seconds);
        model.min_ratio = ActiveValue::Set(input.min_ratio);
        model.updated_at = ActiveValue::Set(time::now());

        Ok(Some(model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SeedingOverride::delete_many()
            .filter(entity::seeding_override::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_all(&self) -> Result<Vec<SeedingOverrideModel>, DbErr> {
        entity::prelude::SeedingOverride::find()
            .order_by_asc(entity::seeding_override::Column::Id)
            .all(self.db)
            .await
    }
}
