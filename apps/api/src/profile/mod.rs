// Profile capture and persistence.

pub mod handlers;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod fixtures;
