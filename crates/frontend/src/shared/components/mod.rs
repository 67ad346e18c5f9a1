pub mod stat_card;
pub mod state_views;
