mod catalog;
mod config;
mod matching;
mod spotify;
mod tidal;
mod transfer;

use anyhow::{Result, bail, ensure};
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::TransferConfig;
use crate::transfer::TransferManager;

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copies a Spotify playlist, album or track into a new Tidal playlist
    Transfer {
        /// Spotify access token
        #[arg(short = 'S', long)]
        spotify_token: String,

        /// Tidal access token
        #[arg(short = 'T', long)]
        tidal_token: String,

        /// Tidal country code (e.g. `US`)
        #[arg(short = 'C', long, default_value = "US")]
        country_code: String,

        /// Name of the playlist created on Tidal
        #[arg(short = 'n', long)]
        name: String,

        /// Minimum combined title+artist similarity (0-200) to accept a match
        #[arg(long, default_value_t = 80.0)]
        threshold: f64,

        /// Number of matched tracks sent to Tidal per request
        #[arg(long, default_value_t = 50)]
        batch_size: usize,

        /// Match the tracks and print a report without creating anything
        #[arg(long)]
        dry_run: bool,

        /// Spotify playlist, album or track URL
        url: String,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transfer {
            spotify_token,
            tidal_token,
            country_code,
            name,
            threshold,
            batch_size,
            dry_run,
            url,
        } => {
            let Some((kind, id)) = spotify::classify_url(&url) else {
                bail!("unrecognized Spotify URL: {url}");
            };
            ensure!(spotify::validate_id(id), "invalid Spotify ID in URL");
            ensure!(
                tidal::validate_country_code(&country_code),
                "invalid country code",
            );
            ensure!(batch_size > 0, "batch size must be at least 1");
            ensure!(
                (0.0..=200.0).contains(&threshold),
                "threshold must be between 0 and 200",
            );

            let source = spotify::Client::new(&spotify_token)?;
            let tracks = match kind {
                spotify::ResourceKind::Playlist => source.playlist_tracks(id).await?,
                spotify::ResourceKind::Album => source.album_tracks(id).await?,
                spotify::ResourceKind::Track => source.track(id).await?,
            };
            ensure!(!tracks.is_empty(), "no tracks found at {url}");

            let config = TransferConfig {
                match_threshold: threshold,
                batch_size,
                ..TransferConfig::default()
            };
            let target = tidal::Client::new(&tidal_token, country_code)?;
            let manager = TransferManager::new(target, config);

            if dry_run {
                let mut matched = Vec::new();
                let mut unmatched = Vec::new();
                for (i, track) in tracks.iter().enumerate() {
                    match manager.find_best_match(track).await? {
                        Some(candidate) => matched.push((i + 1, track, candidate)),
                        None => unmatched.push((i + 1, track)),
                    }
                }

                if !matched.is_empty() {
                    println!("Matched tracks:");
                    for (num, track, candidate) in &matched {
                        if track.title == candidate.title && track.artist == candidate.artist {
                            println!("  #{num} {}", track.title);
                        } else {
                            println!(
                                "  #{num} {} by {} \u{2192} {} by {}",
                                track.title, track.artist, candidate.title, candidate.artist,
                            );
                        }
                    }
                }

                if !unmatched.is_empty() {
                    if !matched.is_empty() {
                        println!();
                    }
                    println!("Unmatched tracks (no Tidal hit cleared the threshold):");
                    for (num, track) in &unmatched {
                        println!("  #{num} {} by {}", track.title, track.artist);
                    }
                }

                return Ok(());
            }

            let mut on_log = |message: &str| println!("{message}");
            // Per-track log lines already carry an [n/total] prefix.
            let mut on_progress = |_current: usize, _total: usize| {};
            let (playlist, unmatched, playlist_url) = manager
                .build_playlist(&name, &tracks, &mut on_log, &mut on_progress)
                .await?;

            println!();
            if !unmatched.is_empty() {
                println!(
                    "Unmatched tracks ({} of {}):",
                    unmatched.len(),
                    tracks.len(),
                );
                for track in &unmatched {
                    println!("  {} by {}", track.title, track.artist);
                }
                println!();
            }
            println!("Created \"{}\": {playlist_url}", playlist.title);
        }
        Commands::Completions { shell } => {
            shell.generate(&mut Cli::command(), &mut std::io::stdout());
        }
    }
    Ok(())
}
