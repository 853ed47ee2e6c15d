use serde::Deserialize;

#[derive(Deserialize)]
pub struct Root {
    pub(in crate::spotify) items: Vec<Item>,
    pub(in crate::spotify) next: Option<String>,
}

#[derive(Deserialize)]
pub struct Item {
    /// Null for entries whose track is no longer available.
    pub(in crate::spotify) track: Option<Track>,
}

#[derive(Deserialize)]
pub struct Track {
    pub(in crate::spotify) name: String,
    pub(in crate::spotify) artists: Vec<Artist>,
    pub(in crate::spotify) album: AlbumRef,
}

#[derive(Deserialize)]
pub struct Artist {
    pub(in crate::spotify) name: String,
}

#[derive(Deserialize)]
pub struct AlbumRef {
    pub(in crate::spotify) name: String,
}
