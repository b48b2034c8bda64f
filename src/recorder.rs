//! JSONL session log.
//!
//! One line per observed state change: the full [`GameSnapshot`] plus the
//! frame timestamp. Lines are only written when `revision` moves, so idle
//! frames cost nothing.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameSnapshot;

#[derive(Serialize)]
struct Record<'a> {
    t_ms: u64,
    #[serde(flatten)]
    snapshot: &'a GameSnapshot,
}

pub struct SnapshotRecorder<W: Write = BufWriter<File>> {
    out: W,
    last_revision: Option<u64>,
    written: u64,
}

impl SnapshotRecorder<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open snapshot log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_revision: None,
            written: 0,
        }
    }

    /// Write `snapshot` if its revision differs from the last one written.
    ///
    /// Returns whether a line was written.
    pub fn record(&mut self, snapshot: &GameSnapshot, t_ms: u64) -> Result<bool> {
        if self.last_revision == Some(snapshot.revision) {
            return Ok(false);
        }
        serde_json::to_writer(&mut self.out, &Record { t_ms, snapshot })?;
        self.out.write_all(b"\n")?;
        self.last_revision = Some(snapshot.revision);
        self.written += 1;
        Ok(true)
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn writes_only_on_new_revision() {
        let mut state = GameState::new(9);
        let mut rec = SnapshotRecorder::new(Vec::new());

        assert!(rec.record(&state.snapshot(), 0).unwrap());
        assert!(!rec.record(&state.snapshot(), 16).unwrap());

        state.start();
        assert!(rec.record(&state.snapshot(), 32).unwrap());
        assert_eq!(rec.written(), 2);

        let out = String::from_utf8(rec.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["t_ms"], 32);
        assert_eq!(v["status"], "PLAYING");
        assert_eq!(v["seed"], 9);
        assert_eq!(v["board"].as_array().unwrap().len(), 20);
        assert!(v["active"].is_object());
    }
}
