pub mod auth;
pub mod config;
pub mod dtos;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod validation;
