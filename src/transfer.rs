use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::{Candidate, PlaylistHandle, SourceTrack, TargetCatalog};
use crate::config::TransferConfig;
use crate::matching;

/// Matches source tracks against a target catalog and assembles them into a
/// new playlist. Owns no state across builds; every `build_playlist` call
/// starts from an empty accumulator.
pub struct TransferManager<C> {
    catalog: C,
    config: TransferConfig,
}

impl<C: TargetCatalog> TransferManager<C> {
    pub fn new(catalog: C, config: TransferConfig) -> Self {
        Self { catalog, config }
    }

    /// One search round-trip against the target catalog followed by pure
    /// scoring. Zero hits is not an error, it is `None`; a failed search
    /// call propagates.
    pub async fn find_best_match(&self, track: &SourceTrack) -> Result<Option<Candidate>> {
        let clean_title = matching::normalize(&track.title);
        let query = format!("{clean_title} {}", track.artist);
        let candidates = self.catalog.search_tracks(&query).await?;
        Ok(matching::best_candidate(
            &clean_title,
            &track.artist,
            &candidates,
            self.config.match_threshold,
        )
        .cloned())
    }

    /// Creates a playlist named `name` on the target catalog and fills it
    /// with the best match for each source track, in order.
    ///
    /// `on_log` gets one "Matched"/"Unmatched" line per track and any
    /// failure before it propagates; `on_progress` fires exactly once per
    /// track with `(index + 1, total)`. Matched IDs go out in batches of
    /// `batch_size` with a fixed pause after each call. A failed batch-add
    /// aborts the build; batches already sent are not rolled back, so an
    /// error can leave a partially-filled playlist behind.
    ///
    /// Returns the playlist handle, the unmatched tracks in source order,
    /// and the playlist URL.
    pub async fn build_playlist(
        &self,
        name: &str,
        tracks: &[SourceTrack],
        on_log: &mut dyn FnMut(&str),
        on_progress: &mut dyn FnMut(usize, usize),
    ) -> Result<(PlaylistHandle, Vec<SourceTrack>, String)> {
        let playlist = self
            .catalog
            .create_playlist(name, "Transferred from Spotify")
            .await
            .context("failed to create target playlist")?;
        let playlist_url = format!("{}/{}", self.config.playlist_base_url, playlist.id);

        let total = tracks.len();
        let mut pending: Vec<u64> = Vec::with_capacity(self.config.batch_size);
        let mut unmatched: Vec<SourceTrack> = Vec::new();
        info!(total, playlist = %playlist.id, "processing tracks");

        for (i, track) in tracks.iter().enumerate() {
            let best = match self.find_best_match(track).await {
                Ok(best) => best,
                Err(e) => {
                    on_log(&format!("Error searching for {}: {e}", track.title));
                    return Err(e);
                }
            };

            match best {
                Some(candidate) => {
                    pending.push(candidate.id);
                    on_log(&format!(
                        "[{}/{total}] Matched: {} by {}",
                        i + 1,
                        track.title,
                        track.artist,
                    ));
                }
                None => {
                    unmatched.push(track.clone());
                    on_log(&format!(
                        "[{}/{total}] Unmatched: {} by {}",
                        i + 1,
                        track.title,
                        track.artist,
                    ));
                }
            }
            on_progress(i + 1, total);

            if (pending.len() >= self.config.batch_size || i == total - 1) && !pending.is_empty() {
                if let Err(e) = self.catalog.add_tracks(&playlist, &pending).await {
                    on_log(&format!("Error adding tracks: {e}"));
                    return Err(e);
                }
                info!(count = pending.len(), "added batch to target playlist");
                pending.clear();
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        Ok((playlist, unmatched, playlist_url))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use anyhow::bail;
    use async_trait::async_trait;

    use super::*;

    struct MockCatalog {
        /// Query string to search hits; a missing query returns
        /// `default_result` if set, otherwise no hits.
        results: HashMap<String, Vec<Candidate>>,
        default_result: Option<Candidate>,
        fail_create: bool,
        fail_add: bool,
        searches: Mutex<Vec<String>>,
        batches: Mutex<Vec<Vec<u64>>>,
    }

    impl MockCatalog {
        fn new() -> Self {
            Self {
                results: HashMap::new(),
                default_result: None,
                fail_create: false,
                fail_add: false,
                searches: Mutex::new(Vec::new()),
                batches: Mutex::new(Vec::new()),
            }
        }

        fn with_results(results: Vec<(&str, Vec<Candidate>)>) -> Self {
            Self {
                results: results
                    .into_iter()
                    .map(|(query, candidates)| (query.to_owned(), candidates))
                    .collect(),
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl TargetCatalog for MockCatalog {
        async fn search_tracks(&self, query: &str) -> Result<Vec<Candidate>> {
            self.searches.lock().unwrap().push(query.to_owned());
            Ok(self
                .results
                .get(query)
                .cloned()
                .or_else(|| self.default_result.clone().map(|c| vec![c]))
                .unwrap_or_default())
        }

        async fn create_playlist(&self, title: &str, _description: &str) -> Result<PlaylistHandle> {
            if self.fail_create {
                bail!("playlist creation rejected");
            }
            Ok(PlaylistHandle {
                id: "pl-1".to_owned(),
                title: title.to_owned(),
            })
        }

        async fn add_tracks(&self, _playlist: &PlaylistHandle, track_ids: &[u64]) -> Result<()> {
            if self.fail_add {
                bail!("add rejected");
            }
            self.batches.lock().unwrap().push(track_ids.to_vec());
            Ok(())
        }
    }

    fn candidate(id: u64, title: &str, artist: &str) -> Candidate {
        Candidate {
            id,
            title: title.to_owned(),
            artist: artist.to_owned(),
        }
    }

    fn source_track(title: &str, artist: &str) -> SourceTrack {
        SourceTrack {
            title: title.to_owned(),
            artist: artist.to_owned(),
            album: "Album".to_owned(),
        }
    }

    fn test_config() -> TransferConfig {
        TransferConfig {
            batch_delay: Duration::ZERO,
            ..TransferConfig::default()
        }
    }

    #[tokio::test]
    async fn test_find_best_match_no_results() {
        let manager = TransferManager::new(MockCatalog::new(), test_config());
        let best = manager
            .find_best_match(&source_track("Song", "Artist"))
            .await
            .unwrap();
        assert_eq!(best, None);
    }

    #[tokio::test]
    async fn test_find_best_match_normalizes_query() {
        let catalog = MockCatalog::with_results(vec![(
            "Song Artist",
            vec![candidate(7, "Song", "Artist")],
        )]);
        let manager = TransferManager::new(catalog, test_config());
        let best = manager
            .find_best_match(&source_track("Song (Remix)", "Artist"))
            .await
            .unwrap();
        assert_eq!(best, Some(candidate(7, "Song", "Artist")));
        assert_eq!(
            *manager.catalog.searches.lock().unwrap(),
            vec!["Song Artist".to_owned()],
        );
    }

    #[tokio::test]
    async fn test_build_playlist_end_to_end() {
        // Exact hit, fuzzy-but-above-threshold hit, no hits.
        let catalog = MockCatalog::with_results(vec![
            ("Song One Artist", vec![candidate(1, "Song One", "Artist")]),
            ("Song Two Artist", vec![candidate(2, "Song Twoo", "Artist")]),
        ]);
        let manager = TransferManager::new(catalog, test_config());
        let tracks = vec![
            source_track("Song One", "Artist"),
            source_track("Song Two (Remix)", "Artist"),
            source_track("Song Three", "Artist"),
        ];

        let mut logs: Vec<String> = Vec::new();
        let mut progress: Vec<(usize, usize)> = Vec::new();
        let (playlist, unmatched, url) = manager
            .build_playlist(
                "Moved",
                &tracks,
                &mut |message| logs.push(message.to_owned()),
                &mut |current, total| progress.push((current, total)),
            )
            .await
            .unwrap();

        assert_eq!(playlist.title, "Moved");
        assert_eq!(url, "https://tidal.com/playlist/pl-1");
        assert_eq!(unmatched, vec![tracks[2].clone()]);
        assert_eq!(*manager.catalog.batches.lock().unwrap(), vec![vec![1, 2]]);

        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0], "[1/3] Matched: Song One by Artist");
        assert_eq!(logs[1], "[2/3] Matched: Song Two (Remix) by Artist");
        assert_eq!(logs[2], "[3/3] Unmatched: Song Three by Artist");
        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn test_build_playlist_batching() {
        // 120 matches flush as 50, 50, 20.
        let catalog = MockCatalog {
            default_result: Some(candidate(9, "Track", "Artist")),
            ..MockCatalog::new()
        };
        let manager = TransferManager::new(catalog, test_config());
        let tracks: Vec<SourceTrack> = (0..120).map(|_| source_track("Track", "Artist")).collect();

        let mut progress: Vec<(usize, usize)> = Vec::new();
        let (_, unmatched, _) = manager
            .build_playlist(
                "Big",
                &tracks,
                &mut |_| {},
                &mut |current, total| progress.push((current, total)),
            )
            .await
            .unwrap();

        assert!(unmatched.is_empty());
        let batches = manager.catalog.batches.lock().unwrap();
        let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![50, 50, 20]);
        assert_eq!(
            batches.iter().map(Vec::len).sum::<usize>() + unmatched.len(),
            tracks.len(),
        );
        assert_eq!(progress.len(), 120);
        assert!(progress.iter().enumerate().all(|(i, &p)| p == (i + 1, 120)));
    }

    #[tokio::test]
    async fn test_build_playlist_create_failure_aborts_before_matching() {
        let catalog = MockCatalog {
            fail_create: true,
            ..MockCatalog::new()
        };
        let manager = TransferManager::new(catalog, test_config());
        let tracks = vec![source_track("Song", "Artist")];

        let result = manager
            .build_playlist("Doomed", &tracks, &mut |_| {}, &mut |_, _| {})
            .await;

        assert!(result.is_err());
        assert!(manager.catalog.searches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_playlist_add_failure_propagates() {
        let catalog = MockCatalog {
            default_result: Some(candidate(9, "Track", "Artist")),
            fail_add: true,
            ..MockCatalog::new()
        };
        let config = TransferConfig {
            batch_size: 2,
            ..test_config()
        };
        let manager = TransferManager::new(catalog, config);
        let tracks: Vec<SourceTrack> = (0..3).map(|_| source_track("Track", "Artist")).collect();

        let mut logs: Vec<String> = Vec::new();
        let result = manager
            .build_playlist(
                "Partial",
                &tracks,
                &mut |message| logs.push(message.to_owned()),
                &mut |_, _| {},
            )
            .await;

        assert!(result.is_err());
        // Failed on the first flush, after two tracks.
        assert_eq!(manager.catalog.searches.lock().unwrap().len(), 2);
        assert!(logs.last().unwrap().starts_with("Error adding tracks:"));
    }

    #[tokio::test]
    async fn test_build_playlist_empty_source() {
        let manager = TransferManager::new(MockCatalog::new(), test_config());

        let mut progress: Vec<(usize, usize)> = Vec::new();
        let (_, unmatched, _) = manager
            .build_playlist("Empty", &[], &mut |_| {}, &mut |current, total| {
                progress.push((current, total))
            })
            .await
            .unwrap();

        assert!(unmatched.is_empty());
        assert!(progress.is_empty());
        assert!(manager.catalog.batches.lock().unwrap().is_empty());
    }
}
