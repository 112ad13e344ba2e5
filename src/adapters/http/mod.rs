//! HTTP adapter for the assessment backend.

mod client;
mod dto;

pub use client::HttpAssessmentClient;
