// Library for tests to access modules

pub mod cli;
pub mod config;
pub mod error;
pub mod image_ref;
pub mod models;
pub mod telemetry;
