mod api_types;
mod client;

pub use client::Client;

use crate::catalog::Candidate;

impl From<api_types::search::Track> for Candidate {
    fn from(track: api_types::search::Track) -> Self {
        Candidate {
            id: track.id,
            title: track.title,
            artist: track
                .artist
                .map(|artist| artist.name)
                .unwrap_or_default(),
        }
    }
}

/// Tidal takes ISO 3166-1 alpha-2 country codes, e.g. `US`.
pub fn validate_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_track_into_candidate() {
        let track = api_types::search::Track {
            id: 42,
            title: "Song".to_owned(),
            artist: Some(api_types::search::Artist {
                name: "Artist".to_owned(),
            }),
        };
        assert_eq!(
            Candidate::from(track),
            Candidate {
                id: 42,
                title: "Song".to_owned(),
                artist: "Artist".to_owned(),
            },
        );
    }

    #[test]
    fn test_search_track_into_candidate_missing_artist() {
        let track = api_types::search::Track {
            id: 42,
            title: "Song".to_owned(),
            artist: None,
        };
        assert_eq!(Candidate::from(track).artist, "");
    }

    #[test]
    fn test_validate_country_code() {
        assert!(validate_country_code("US"));
        assert!(validate_country_code("DE"));
        assert!(!validate_country_code("us"));
        assert!(!validate_country_code("USA"));
        assert!(!validate_country_code(""));
    }
}
