//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Input for creating a link
//! - [`LinkState`] - Derived lifecycle state of a link

pub mod link;

pub use link::{Link, LinkState, NewLink};
