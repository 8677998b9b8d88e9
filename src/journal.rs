//! JSONL observation journal.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::observation::Observation;
use crate::optimizer::BayesianOptimizer;

/// An append-only log of observations, one JSON object per line.
///
/// Observations are only ever appended, which makes a journal a natural
/// checkpoint for long experiment campaigns: after a crash, replaying the
/// file restores the history exactly. Writes take an exclusive file lock,
/// reads a shared one, so several processes may watch the same file.
///
/// Attach a journal with
/// [`OptimizerBuilder::journal`](crate::OptimizerBuilder::journal) to have
/// every registered observation written through automatically.
///
/// # Examples
///
/// ```no_run
/// use bayesopt::{BayesianOptimizer, ObservationJournal};
///
/// let journal = ObservationJournal::new("campaign.jsonl");
/// let mut optimizer = BayesianOptimizer::new(vec![(0.0, 1.0)]).unwrap();
/// let restored = journal.replay_into(&mut optimizer).unwrap();
/// println!("resumed with {restored} observations");
/// ```
#[derive(Debug)]
pub struct ObservationJournal {
    path: PathBuf,
    /// Serialise in-process writes so we only hold the file lock briefly.
    write_lock: Mutex<()>,
}

impl ObservationJournal {
    /// Creates a journal at `path`. The file is created on the first write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one observation and flush it to disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be opened, locked or
    /// written.
    pub fn append(&self, observation: &Observation) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Storage(e.to_string()))?;

        file.lock_exclusive()
            .map_err(|e| Error::Storage(e.to_string()))?;

        let line = serde_json::to_string(observation).map_err(|e| Error::Storage(e.to_string()))?;

        writeln!(file, "{line}").map_err(|e| Error::Storage(e.to_string()))?;
        file.flush().map_err(|e| Error::Storage(e.to_string()))?;

        file.unlock().map_err(|e| Error::Storage(e.to_string()))?;

        Ok(())
    }

    /// Read every observation in file order.
    ///
    /// A missing file is an empty journal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file exists but cannot be read or
    /// a line cannot be parsed.
    pub fn load(&self) -> Result<Vec<Observation>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Storage(e.to_string())),
        };

        file.lock_shared()
            .map_err(|e| Error::Storage(e.to_string()))?;

        let reader = BufReader::new(&file);
        let mut observations = Vec::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::Storage(e.to_string()))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let obs: Observation = serde_json::from_str(line)
                .map_err(|e| Error::Storage(format!("line {}: {e}", lineno + 1)))?;
            observations.push(obs);
        }

        file.unlock().map_err(|e| Error::Storage(e.to_string()))?;

        Ok(observations)
    }

    /// Register every journaled observation with `optimizer`, in order.
    ///
    /// Returns the number of observations replayed. When `optimizer` already
    /// writes through to this same file, the replayed lines are not appended
    /// again. A seeded optimizer's RNG is advanced past the replayed
    /// observations, so it does not re-propose them.
    ///
    /// # Errors
    ///
    /// Any error from [`load`](Self::load), or from
    /// [`register_observation`](BayesianOptimizer::register_observation) if
    /// the journal does not fit the optimizer's search space.
    pub fn replay_into(&self, optimizer: &mut BayesianOptimizer) -> Result<usize> {
        let observations = self.load()?;
        optimizer.replay_journal(&observations, &self.path)?;
        trace_info!(n = observations.len(), path = %self.path.display(), "journal replayed");
        Ok(observations.len())
    }
}
