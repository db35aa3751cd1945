//! Background workers driven by store change notifications.

pub mod board_refresher;
