//! # SEO Inspector Common Library
//!
//! Shared code for the SEO Inspector service and its clients:
//! - Analysis data model (meta tags, results, recommendations)
//! - The canonical checklist, scoring and recommendation rules
//! - Derived report views and CSV export
//! - Configuration loading
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod seo;
pub mod time;

pub use error::{Error, Result};
