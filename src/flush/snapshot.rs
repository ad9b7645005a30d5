use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use crate::model::Kingdom;

/// Write a kingdom snapshot to `path` as pretty-printed JSON.
///
/// Lets a headless host checkpoint kingdom state between turns; the actor
/// storage used by the production host is external to this crate.
pub fn write_snapshot(kingdom: &Kingdom, path: &Path) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, kingdom)?;
    Ok(())
}

/// Read a kingdom snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> io::Result<Kingdom> {
    let reader = BufReader::new(File::open(path)?);
    let kingdom = serde_json::from_reader(reader)?;
    Ok(kingdom)
}
