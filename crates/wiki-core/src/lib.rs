//! wiki-core: Core types for Token Wiki
//!
//! This crate provides:
//! - The [`Token`] namespace key and the [`Page`] record
//! - Bracketed keyword extraction used to derive related pages
//! - Plain-text archive rendering
//! - A [`Clock`] abstraction for stamping `updated_at`
//!
//! Nothing here performs I/O. Storage lives in `wiki-store`, transport in
//! `wiki-server`.

pub mod archive;
pub mod clock;
pub mod links;
pub mod types;

pub use archive::{ARCHIVE_FILENAME, render_archive};
pub use clock::{Clock, ManualClock, SystemClock};
pub use links::{bracketed, extract_keywords, is_related};
pub use types::{Page, Token, ValidationError, matches_query, validate_content};
