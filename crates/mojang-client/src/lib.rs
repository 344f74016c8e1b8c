//! Mojang Identity Client
//!
//! Looks up player UUIDs by username and fetches session profiles from the
//! Mojang identity services. Non-success responses are captured whole so
//! callers can relay them unchanged.

pub mod client;
pub mod error;
pub mod types;

pub use client::MojangClient;
pub use error::{MojangError, Result};
pub use types::{NameLookup, RawProfile, RawProperty, UpstreamReply};
