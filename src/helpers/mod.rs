//! Helper functions shared by the pipeline stages
//!
//! Dates, URLs and small HTML lookups. None of these touch the file system.

pub mod date;
pub mod html;
pub mod url;

pub use date::{display_date, sort_key};
pub use url::{encode_path, full_url};
