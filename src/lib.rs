// book catalogue

pub mod config;
pub mod error;
pub mod routes;
pub mod sql;
pub mod types;
pub mod validate;
pub mod views;
