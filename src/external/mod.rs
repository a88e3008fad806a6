//! Outbound HTTP plumbing shared by webhook providers.

pub mod client;
