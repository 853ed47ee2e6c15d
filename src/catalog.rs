use anyhow::Result;
use async_trait::async_trait;

/// A track as read from the source catalog. A fetched list preserves the
/// source playlist order, and that order carries through to the unmatched
/// report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// A search hit from the target catalog, only alive while one source track
/// is being scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u64,
    pub title: String,
    /// Empty when the catalog returned no artist for the hit.
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistHandle {
    pub id: String,
    pub title: String,
}

/// The operations the matcher needs from the catalog a playlist is built in.
#[async_trait]
pub trait TargetCatalog {
    /// Text search restricted to track results.
    async fn search_tracks(&self, query: &str) -> Result<Vec<Candidate>>;

    async fn create_playlist(&self, title: &str, description: &str) -> Result<PlaylistHandle>;

    async fn add_tracks(&self, playlist: &PlaylistHandle, track_ids: &[u64]) -> Result<()>;
}
