//! Aria Core
//!
//! Platform-agnostic domain types and traits for the Aria playback core.
//!
//! This crate provides the foundational building blocks shared between the
//! playback session and its collaborators:
//! - **Domain Types**: `SongId`, `Song`, `ResolvedTrack`
//! - **Core Traits**: `MediaResolver`
//!
//! # Example
//!
//! ```rust
//! use aria_core::{Song, SongId};
//!
//! let song = Song {
//!     id: SongId::new("7c41"),
//!     title: "Golden Hour".to_string(),
//!     author: "Night Drive".to_string(),
//!     image_path: Some("images/golden-hour.png".to_string()),
//! };
//!
//! assert_eq!(song.id.as_str(), "7c41");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use resolver::{MediaResolver, ResolvedTrack};
pub use types::{Song, SongId};
