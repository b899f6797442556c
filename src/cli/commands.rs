//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daylio-import")]
#[command(
    about = "Import Daylio journal entries from an exported CSV file, and optionally sync them to Exist.io",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the Daylio CSV file to import
    #[arg(value_name = "FILE_PATH")]
    pub file_path: PathBuf,

    /// Sync moods to Exist.io
    #[arg(long, group = "action")]
    pub sync_moods: bool,

    /// Sync activities to Exist.io
    #[arg(long, group = "action")]
    pub sync_activities: bool,

    /// Create custom attributes for each activity
    #[arg(long, group = "action")]
    pub create_activity_tags: bool,

    /// Acquire Exist's mood attribute so mood values can be written
    #[arg(long, group = "action")]
    pub acquire_mood: bool,

    /// Instead of syncing, print a preview of what would be synced
    #[arg(short, long)]
    pub dry_run: bool,

    /// Config file listing activities to filter out
    #[arg(long, value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Secrets file holding the Exist developer access token
    #[arg(long, value_name = "PATH", default_value = "secrets.json")]
    pub secrets: PathBuf,
}

/// The single action selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SyncMoods,
    SyncActivities,
    CreateActivityTags,
    AcquireMood,
}

impl Cli {
    /// Selected action, if any. clap rejects more than one.
    pub fn action(&self) -> Option<Action> {
        if self.sync_moods {
            Some(Action::SyncMoods)
        } else if self.sync_activities {
            Some(Action::SyncActivities)
        } else if self.create_activity_tags {
            Some(Action::CreateActivityTags)
        } else if self.acquire_mood {
            Some(Action::AcquireMood)
        } else {
            None
        }
    }
}
