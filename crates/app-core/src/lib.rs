//! Core domain types for Meridian People
//!
//! This crate contains the shared pieces the rest of the workspace builds
//! on: the application configuration (service URL table) and the user
//! profile types returned by the people service.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod users;

pub use config::{AppConfig, ServiceUrls};
pub use users::UserInfo;
