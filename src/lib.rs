// src/lib.rs
pub mod banner;
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod report;
pub mod runner;
