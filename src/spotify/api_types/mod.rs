pub mod album;
pub mod playlist_tracks;
pub mod track;
