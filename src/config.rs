use std::time::Duration;

/// Tuning knobs for one transfer, passed explicitly to the manager rather
/// than living in process-wide state.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Minimum combined title+artist similarity (0-200 scale) a search hit
    /// must reach to count as a match. The historical default of 80 is very
    /// permissive on that scale and may want recalibrating against real
    /// libraries.
    pub match_threshold: f64,
    /// Matched track IDs are sent to the target in groups of this size.
    pub batch_size: usize,
    /// Pause after every batch-add call, to stay under the target catalog's
    /// rate limits.
    pub batch_delay: Duration,
    /// Base URL the resulting playlist link is built from.
    pub playlist_base_url: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            match_threshold: 80.0,
            batch_size: 50,
            batch_delay: Duration::from_secs(2),
            playlist_base_url: "https://tidal.com/playlist".to_owned(),
        }
    }
}
