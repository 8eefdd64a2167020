pub mod api;
pub mod context;
pub mod cookie;
pub mod guard;
pub mod session;
