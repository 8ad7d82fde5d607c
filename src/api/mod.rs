//! Pydio API client and action table.

pub mod action;
pub mod client;

pub use action::Action;
pub use client::ApiClient;
