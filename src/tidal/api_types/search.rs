use serde::Deserialize;

#[derive(Deserialize)]
pub struct Root {
    pub(in crate::tidal) items: Vec<Track>,
}

#[derive(Deserialize)]
pub struct Track {
    pub(in crate::tidal) id: u64,
    pub(in crate::tidal) title: String,
    /// Main artist; not present on every hit.
    pub(in crate::tidal) artist: Option<Artist>,
}

#[derive(Deserialize)]
pub struct Artist {
    pub(in crate::tidal) name: String,
}
