//! CLI module for vidcompanion.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::video_source::Language;
use clap::{Parser, Subcommand};

/// vidcompanion - study companion for YouTube videos
///
/// Turns a video's captions into study notes, or chats with the video.
/// Hindi captions are translated into English first.
#[derive(Parser, Debug)]
#[command(name = "vidcompanion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Caption language of the video (en or hi)
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate key topics and study notes for a video
    Notes {
        /// YouTube URL or video ID
        url: String,
    },

    /// Start an interactive chat about a video
    Chat {
        /// YouTube URL or video ID
        url: String,
    },

    /// Ask a single question about a video
    Ask {
        /// YouTube URL or video ID
        url: String,

        /// The question to ask
        question: String,
    },

    /// Print a video's transcript
    Transcript {
        /// YouTube URL or video ID
        url: String,

        /// Translate the transcript into English
        #[arg(short, long)]
        translate: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
