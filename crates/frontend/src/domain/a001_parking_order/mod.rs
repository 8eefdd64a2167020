pub mod actions;
pub mod api;
pub mod columns;
pub mod query;
pub mod ui;
