use std::io::{Error as IoError, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OptimizerConfig;
use crate::observation::ObservationHistory;
use crate::space::SearchSpace;

use super::BayesianOptimizer;

/// Current snapshot schema version.
const SNAPSHOT_VERSION: u32 = 1;

/// A serializable snapshot of an optimizer's state.
///
/// Captures everything needed to resume a campaign: the search space, the
/// configuration (including the seed) and every observation. The RNG
/// position and the fitted surrogate are not stored: the RNG is advanced
/// one draw per observation on restore, and the surrogate is rebuilt from
/// the history on the first suggestion after loading.
///
/// # Schema versioning
///
/// The `version` field enables future schema evolution without breaking
/// existing files. The current version is `1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizerSnapshot {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// The search space.
    pub search_space: SearchSpace,
    /// The optimizer configuration.
    pub config: OptimizerConfig,
    /// All observations in evaluation order.
    pub observations: ObservationHistory,
}

impl BayesianOptimizer {
    /// Capture the current state as an [`OptimizerSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> OptimizerSnapshot {
        OptimizerSnapshot {
            version: SNAPSHOT_VERSION,
            search_space: self.space.clone(),
            config: self.config.clone(),
            observations: self.history.clone(),
        }
    }

    /// Rebuild an optimizer from a snapshot.
    ///
    /// Observations are replayed through
    /// [`register_observation`](Self::register_observation), so a snapshot
    /// that was edited by hand is validated like live data. With a seed, the
    /// RNG resumes past the draws already spent, so initial random
    /// suggestions do not repeat evaluated points.
    ///
    /// # Errors
    ///
    /// Any error of [`with_config`](Self::with_config) or
    /// [`register_observation`](Self::register_observation).
    pub fn from_snapshot(snapshot: OptimizerSnapshot) -> crate::Result<Self> {
        let mut optimizer = Self::with_config(snapshot.search_space, snapshot.config)?;
        optimizer.replay(snapshot.observations.as_slice())?;
        Ok(optimizer)
    }

    /// Save the optimizer state to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot();

        // Write to a sibling temp file, then rename over the target.
        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        let file = std::fs::File::create(&tmp_path)?;
        serde_json::to_writer_pretty(file, &snapshot).map_err(IoError::other)?;
        std::fs::rename(&tmp_path, path)
    }

    /// Load an optimizer from a JSON file written by [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or parsed, has an
    /// unknown schema version, or holds observations that no longer pass
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        let snapshot: OptimizerSnapshot = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| IoError::new(ErrorKind::InvalidData, e))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(IoError::new(
                ErrorKind::InvalidData,
                format!("unsupported snapshot version {}", snapshot.version),
            ));
        }
        Self::from_snapshot(snapshot).map_err(|e| IoError::new(ErrorKind::InvalidData, e))
    }
}
