use crate::error::{StatsError, StatsResult};
use crate::model::{StatLine, TeamLine};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Records that can be checked after parsing.
pub trait Validate {
    fn validate(&self) -> StatsResult<()>;
}

impl Validate for StatLine {
    fn validate(&self) -> StatsResult<()> {
        StatLine::validate(self)
    }
}

impl Validate for TeamLine {
    fn validate(&self) -> StatsResult<()> {
        TeamLine::validate(self)
    }
}

fn read_csv<T, R>(reader: R) -> StatsResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (row, record) in rdr.deserialize::<T>().enumerate() {
        let record = record?;
        if let Err(e) = record.validate() {
            warn!("Rejected CSV row {}: {}", row + 1, e);
            return Err(e);
        }
        out.push(record);
    }
    Ok(out)
}

fn read_json<T, R>(reader: R) -> StatsResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
    R: Read,
{
    let records: Vec<T> = serde_json::from_reader(reader)?;
    for (i, r) in records.iter().enumerate() {
        if let Err(e) = r.validate() {
            warn!("Rejected JSON element {}: {}", i, e);
            return Err(e);
        }
    }
    Ok(records)
}

fn read_file<T>(path: &Path) -> StatsResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let file = File::open(path).map_err(|e| {
        StatsError::Config(format!("could not open '{}': {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    debug!("Loading {} as {}", path.display(), if is_json { "JSON" } else { "CSV" });
    let records = if is_json {
        read_json(reader)?
    } else {
        read_csv(reader)?
    };
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_stat_lines<R: Read>(reader: R) -> StatsResult<Vec<StatLine>> {
    read_csv(reader)
}

pub fn load_stat_lines_json<R: Read>(reader: R) -> StatsResult<Vec<StatLine>> {
    read_json(reader)
}

/// CSV by default; `.json` files are read as a JSON array.
pub fn load_stat_lines_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Vec<StatLine>> {
    read_file(path.as_ref())
}

pub fn load_team_lines<R: Read>(reader: R) -> StatsResult<Vec<TeamLine>> {
    read_csv(reader)
}

pub fn load_team_lines_json<R: Read>(reader: R) -> StatsResult<Vec<TeamLine>> {
    read_json(reader)
}

pub fn load_team_lines_from_file<P: AsRef<Path>>(path: P) -> StatsResult<Vec<TeamLine>> {
    read_file(path.as_ref())
}
