//! Pure helper functions shared across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`validation`] - URL and short code validation rules

pub mod code_generator;
pub mod validation;
