//! Inquiry Interview - Rule-based decision core for simulated interviews
//!
//! This crate classifies a candidate's inquiry activity into an interviewing
//! style, picks each next question from a static catalog, and moves the
//! interview forward through four fixed phases. Phrasing the chosen question
//! is left to a pluggable renderer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
