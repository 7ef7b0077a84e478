pub mod build;
pub mod classify;
pub mod config;
pub mod validate;
