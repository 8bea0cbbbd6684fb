//! Song domain type

use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// Song metadata as surfaced to the transport UI
///
/// Carries the display fields the player needs; storage-only fields
/// (owner, upload path, like counts) live with the catalog, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Performing artist
    pub author: String,

    /// Artwork reference, if any
    pub image_path: Option<String>,
}

impl Song {
    /// Create a song with minimal metadata
    pub fn new(id: impl Into<SongId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image_path: None,
        }
    }
}
