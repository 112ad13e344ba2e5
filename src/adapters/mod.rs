//! Adapter implementations of the outbound ports.

pub mod demo;
pub mod http;
