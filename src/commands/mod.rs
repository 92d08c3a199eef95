//! CLI commands for pathrider

pub mod connect;
pub mod dispatch;
pub mod report;
pub mod session;
pub mod stream;
