pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod models;
pub mod services;
