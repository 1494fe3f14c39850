pub mod dashboard;
pub mod handlers;
