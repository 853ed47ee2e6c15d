mod api_types;
mod client;

pub use client::Client;

use once_cell::sync::Lazy;
use regex::Regex;

static PLAYLIST_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"playlist/([a-zA-Z0-9]+)").unwrap());
static ALBUM_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"album/([a-zA-Z0-9]+)").unwrap());
static TRACK_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"track/([a-zA-Z0-9]+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Playlist,
    Album,
    Track,
}

pub fn extract_playlist_id(url: &str) -> Option<&str> {
    PLAYLIST_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

pub fn extract_album_id(url: &str) -> Option<&str> {
    ALBUM_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

pub fn extract_track_id(url: &str) -> Option<&str> {
    TRACK_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Works out what kind of Spotify resource a share URL points at and pulls
/// out its ID.
pub fn classify_url(url: &str) -> Option<(ResourceKind, &str)> {
    if let Some(id) = extract_playlist_id(url) {
        return Some((ResourceKind::Playlist, id));
    }
    if let Some(id) = extract_album_id(url) {
        return Some((ResourceKind::Album, id));
    }
    if let Some(id) = extract_track_id(url) {
        return Some((ResourceKind::Track, id));
    }
    None
}

/// Spotify IDs are base62.
pub fn validate_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}
