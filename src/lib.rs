//! GründerAI Intake Core
//!
//! This crate implements the deterministic core of the GründerAI founder
//! intake flow: the multi-step founder-profile wizard, the confidence
//! scoring heuristic, and the scenario-assessment sub-flow driven through
//! an injected backend client.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
