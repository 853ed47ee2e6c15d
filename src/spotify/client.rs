use anyhow::Result;
use tracing::info;

use crate::catalog::SourceTrack;
use crate::spotify::api_types;

const API_BASE: &str = "https://api.spotify.com/v1";
const PAGE_LIMIT: usize = 100;

pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new(access_token: &str) -> Result<Self> {
        let headers = {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                "Authorization",
                format!("Bearer {access_token}").try_into()?,
            );
            headers
        };
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    /// Pages through the whole playlist before returning; matching never
    /// sees a partial list.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<SourceTrack>> {
        let mut tracks = Vec::new();
        let mut offset = 0;

        loop {
            let limit = PAGE_LIMIT.to_string();
            let offset_param = offset.to_string();
            let page: api_types::playlist_tracks::Root = self
                .client
                .get(format!("{API_BASE}/playlists/{playlist_id}/tracks"))
                .query(&[
                    ("offset", offset_param.as_str()),
                    ("limit", limit.as_str()),
                    (
                        "fields",
                        "items(track(name,artists(name),album(name))),next",
                    ),
                ])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            for item in page.items {
                let Some(track) = item.track else {
                    continue;
                };
                tracks.push(SourceTrack {
                    title: track.name,
                    artist: track
                        .artists
                        .first()
                        .map(|artist| artist.name.clone())
                        .unwrap_or_default(),
                    album: track.album.name,
                });
            }

            if page.next.is_none() {
                break;
            }
            offset += PAGE_LIMIT;
        }

        info!(count = tracks.len(), "fetched tracks from Spotify playlist");
        Ok(tracks)
    }

    pub async fn album_tracks(&self, album_id: &str) -> Result<Vec<SourceTrack>> {
        let album: api_types::album::Album = self
            .client
            .get(format!("{API_BASE}/albums/{album_id}"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let listing: api_types::album::Tracks = self
            .client
            .get(format!("{API_BASE}/albums/{album_id}/tracks"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let artist = album
            .artists
            .first()
            .map(|artist| artist.name.clone())
            .unwrap_or_default();
        let tracks: Vec<SourceTrack> = listing
            .items
            .into_iter()
            .map(|track| SourceTrack {
                title: track.name,
                artist: artist.clone(),
                album: album.name.clone(),
            })
            .collect();

        info!(count = tracks.len(), "fetched tracks from Spotify album");
        Ok(tracks)
    }

    pub async fn track(&self, track_id: &str) -> Result<Vec<SourceTrack>> {
        let track: api_types::track::Track = self
            .client
            .get(format!("{API_BASE}/tracks/{track_id}"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(vec![SourceTrack {
            title: track.name,
            artist: track
                .artists
                .first()
                .map(|artist| artist.name.clone())
                .unwrap_or_default(),
            album: track.album.name,
        }])
    }
}
