//! Daylio CSV export reader

use crate::domain::entry::split_activities;
use crate::domain::{collect_activity_names, JournalEntry};
use crate::error::{ImportError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Entries parsed from one export, plus every distinct activity they use
#[derive(Debug, Clone, Default)]
pub struct DaylioExport {
    pub entries: Vec<JournalEntry>,
    pub activities: BTreeSet<String>,
}

/// Positions of the columns the importer reads
struct Columns {
    full_date: usize,
    mood: usize,
    activities: usize,
    note: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            full_date: find("full_date")?,
            mood: find("mood")?,
            activities: find("activities")?,
            note: find("note")?,
        })
    }
}

/// Import a Daylio CSV export from disk
pub fn import_daylio_csv(path: &Path, config: &Config) -> Result<DaylioExport> {
    let file = File::open(path).map_err(|source| ImportError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let export = import_from_reader(file, config)?;
    debug!(
        path = %path.display(),
        entries = export.entries.len(),
        activities = export.activities.len(),
        "Imported Daylio export"
    );
    Ok(export)
}

/// Import Daylio CSV data from any reader, in row order
pub fn import_from_reader<R: Read>(reader: R, config: &Config) -> Result<DaylioExport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::locate(reader.headers()?)?;

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        entries.push(parse_record(&record, &columns, config)?);
    }

    let activities = collect_activity_names(&entries);
    Ok(DaylioExport {
        entries,
        activities,
    })
}

fn parse_record(record: &StringRecord, columns: &Columns, config: &Config) -> Result<JournalEntry> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    // Ragged rows are accepted as long as the columns we read are present.
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
    };

    let raw_date = field(columns.full_date, "full_date")?;
    let date = raw_date
        .parse::<NaiveDate>()
        .map_err(|source| ImportError::Parse {
            line,
            value: raw_date.to_string(),
            source,
        })?;

    let activities = split_activities(
        field(columns.activities, "activities")?,
        &config.filter_activities,
    );

    Ok(JournalEntry::new(
        date,
        field(columns.mood, "mood")?.to_string(),
        activities,
        field(columns.note, "note")?.to_string(),
    ))
}
