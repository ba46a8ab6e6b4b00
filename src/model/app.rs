use sea_orm::DatabaseConnection;

use crate::{integration::IntegrationsHandle, util::gate::StoreGate};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub integrations: IntegrationsHandle,
    pub gate: StoreGate,
    pub request_timeout: std::time::Duration,
}
