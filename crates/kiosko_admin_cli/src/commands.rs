//! Console command modules, one per domain area.

pub mod advert_cmd;
pub mod auth_cmd;
pub mod campaign_cmd;
pub mod editor_cmd;
pub mod export_cmd;
pub mod game_cmd;
pub mod highlight_cmd;
pub mod publication_cmd;
pub mod supplement_cmd;
