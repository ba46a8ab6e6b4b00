pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_media_item_table;
mod m20250601_000002_create_torrent_table;
mod m20250601_000003_create_seeding_override_table;
mod m20250601_000004_create_audit_log_table;
mod m20250601_000005_create_watch_history_table;
mod m20250601_000006_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_media_item_table::Migration),
            Box::new(m20250601_000002_create_torrent_table::Migration),
            Box::new(m20250601_000003_create_seeding_override_table::Migration),
            Box::new(m20250601_000004_create_audit_log_table::Migration),
            Box::new(m20250601_000005_create_watch_history_table::Migration),
            Box::new(m20250601_000006_create_setting_table::Migration),
        ]
    }
}
