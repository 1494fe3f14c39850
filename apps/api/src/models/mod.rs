pub mod document;
pub mod notice;
pub mod profile;
