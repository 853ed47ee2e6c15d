use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Candidate;

/// Dash-separated version suffixes ("Song - Live Version") and
/// parenthesised or bracketed annotations anywhere in the title.
static TITLE_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s-\s.*|\s\([^)]*\)|\s\[.*?\]").unwrap());

/// Strips annotation noise from a raw title to get a comparison string.
///
/// Total: a title with no noise patterns comes back unchanged, and a title
/// that is nothing but noise comes back empty. Callers must treat an empty
/// query as a guaranteed non-match, not an error.
pub fn normalize(title: &str) -> String {
    TITLE_NOISE.replace_all(title, "").trim().to_owned()
}

/// Case-insensitive ratio-based edit-distance similarity on a 0-100 scale.
///
/// Deliberately plain Levenshtein ratio rather than token-set or partial
/// matching: near-exact titles win over semantically-similar-but-reordered
/// ones.
fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// Picks the best search hit for a track, or `None` when nothing clears the
/// threshold (including an empty candidate list).
///
/// Each candidate scores `similarity(title)` + `similarity(artist)` on a
/// combined 0-200 scale; a candidate only displaces the current best when
/// its combined score is strictly greater and at least `threshold`.
pub fn best_candidate<'a>(
    clean_title: &str,
    artist: &str,
    candidates: &'a [Candidate],
    threshold: f64,
) -> Option<&'a Candidate> {
    let mut best: Option<&Candidate> = None;
    let mut best_score = 0.0;

    for candidate in candidates {
        let title_score = similarity(clean_title, &candidate.title);
        let artist_score = similarity(artist, &candidate.artist);
        let total_score = title_score + artist_score;

        if total_score > best_score && total_score >= threshold {
            best_score = total_score;
            best = Some(candidate);
        }
    }

    best
}
