use super::*;
use crate::data::{
    audit_log::{AuditLogRepository, ACTION_DELETE},
    media_item::MediaItemRepository,
};

mod record_deletion;
