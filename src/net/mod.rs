//! Networking modules for the external auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the client and its error model, `transport` provides the
//! browser and scripted transports, `api` holds the auth calls, and `types`
//! defines the wire schema.

pub mod api;
pub mod http;
pub mod transport;
pub mod types;
