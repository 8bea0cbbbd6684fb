//! Media resolution trait
//!
//! Abstracts the catalog lookup that turns a song id into playable media.
//! Implementations live with the storage/CDN integration; the playback
//! session only consumes the trait.

use crate::types::{Song, SongId};
use serde::{Deserialize, Serialize};

/// A song resolved to playable media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrack {
    /// Metadata for display alongside playback
    pub song: Song,

    /// Playable media URL
    pub url: String,
}

/// Resolves song ids to metadata and a playable media URL
///
/// Returning `None` means the id is unknown or no URL is available yet
/// (still signing, upload incomplete, row deleted). The playback session
/// treats `None` as "no playback possible" and shows an idle transport;
/// it is not an error condition.
pub trait MediaResolver: Send {
    /// Resolve a song id to metadata plus a playable URL
    fn resolve(&self, id: &SongId) -> Option<ResolvedTrack>;
}
