use entity::sea_orm_active_enums::{MediaType, TrackerType};
use removarr::{
    data::{media_item::MediaItemRepository, torrent::TorrentRepository},
    error::{config::ConfigError, Error},
    integration::Service,
    service::sync::SyncService,
    util::gate::StoreGate,
};
use removarr_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::setup::{app_state, integrations};

mod media;
mod requests;
mod torrents;
