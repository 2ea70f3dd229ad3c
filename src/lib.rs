//! In-memory data service behind the Storly store-rating application.
//! State lives behind one async lock and lasts for the process lifetime.

pub mod access;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
pub mod validation;
