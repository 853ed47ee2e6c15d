use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{Candidate, PlaylistHandle, TargetCatalog};
use crate::tidal::api_types;

const API_BASE: &str = "https://api.tidal.com/v1";
const SEARCH_LIMIT: usize = 25;

pub struct Client {
    client: reqwest::Client,
    country_code: String,
}

impl Client {
    pub fn new(access_token: &str, country_code: String) -> Result<Self> {
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
        Ok(Self {
            client,
            country_code,
        })
    }

    async fn session(&self) -> Result<api_types::session::Root> {
        Ok(self
            .client
            .get(format!("{API_BASE}/sessions"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[async_trait]
impl TargetCatalog for Client {
    async fn search_tracks(&self, query: &str) -> Result<Vec<Candidate>> {
        let limit = SEARCH_LIMIT.to_string();
        let results: api_types::search::Root = self
            .client
            .get(format!("{API_BASE}/search/tracks"))
            .query(&[
                ("query", query),
                ("limit", limit.as_str()),
                ("countryCode", self.country_code.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(query, hits = results.items.len(), "Tidal track search");
        Ok(results.items.into_iter().map(Candidate::from).collect())
    }

    async fn create_playlist(&self, title: &str, description: &str) -> Result<PlaylistHandle> {
        let user_id = self.session().await?.user_id;
        let playlist: api_types::playlist::Root = self
            .client
            .post(format!("{API_BASE}/users/{user_id}/playlists"))
            .query(&[("countryCode", self.country_code.as_str())])
            .form(&[("title", title), ("description", description)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(PlaylistHandle {
            id: playlist.uuid,
            title: playlist.title,
        })
    }

    async fn add_tracks(&self, playlist: &PlaylistHandle, track_ids: &[u64]) -> Result<()> {
        let ids = track_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.client
            .post(format!("{API_BASE}/playlists/{}/items", playlist.id))
            .query(&[("countryCode", self.country_code.as_str())])
            .form(&[("trackIds", ids.as_str()), ("onDupes", "FAIL")])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
