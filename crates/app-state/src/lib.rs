//! Application state management for Meridian People
//!
//! This crate provides the data-fetching layer between the UI shell and
//! the backend services: a cached query client for the current user's
//! profile.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod user;

pub use user::{
    QueryState, UserInfoApi, UserInfoClient, UserInfoSnapshot, UserInfoSource, UserQueryError,
};
