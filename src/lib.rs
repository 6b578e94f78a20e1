pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod services;
