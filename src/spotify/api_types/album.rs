use serde::Deserialize;

#[derive(Deserialize)]
pub struct Album {
    pub(in crate::spotify) name: String,
    /// The album's main artists; the first one is applied to every track.
    pub(in crate::spotify) artists: Vec<Artist>,
}

#[derive(Deserialize)]
pub struct Artist {
    pub(in crate::spotify) name: String,
}

#[derive(Deserialize)]
pub struct Tracks {
    pub(in crate::spotify) items: Vec<AlbumTrack>,
}

#[derive(Deserialize)]
pub struct AlbumTrack {
    pub(in crate::spotify) name: String,
}
