//! Command implementations for transit-route

pub mod dispatch;
pub mod route;
pub mod stations;
