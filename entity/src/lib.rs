pub mod prelude;

pub mod audit_log;
pub mod media_item;
pub mod sea_orm_active_enums;
pub mod seeding_override;
pub mod setting;
pub mod torrent;
pub mod watch_history;
