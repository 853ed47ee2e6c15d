use serde::Deserialize;

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
