use super::*;
use crate::data::setting::SettingRepository;
