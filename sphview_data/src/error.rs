use core::fmt;
use std::{error::Error, io, path::PathBuf};

/// Error while loading a particle dataset from disk.
///
/// Loading is all-or-nothing: any of these means no usable store was produced
/// and the process must not enter the render loop.
#[derive(Debug)]
pub enum LoadError {
    /// A timestep file was missing or could not be read.
    Io {
        /// Path of the file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A timestep file did not parse as particle data.
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number, or 0 if the file as a whole is unusable.
        line: usize,
        /// What was wrong with the input.
        reason: String,
    },
    /// A timestep's particle count differs from the first timestep's.
    ///
    /// The particle count is fixed for the whole session, so this is a hard
    /// error rather than a truncation.
    InconsistentParticleCount {
        /// Label of the offending timestep.
        label: String,
        /// Count established by the first timestep.
        expected: usize,
        /// Count found in this timestep.
        actual: usize,
    },
    /// A timestep's position array is not three floats per density value.
    ShapeMismatch {
        /// Label of the offending timestep.
        label: String,
        /// Length of the flattened position array.
        positions: usize,
        /// Length of the density array.
        density: usize,
    },
    /// The label sequence was empty or the first timestep had no particles.
    NoParticles,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Malformed { path, line, reason } => {
                if *line == 0 {
                    write!(f, "{}: {}", path.display(), reason)
                } else {
                    write!(f, "{}:{}: {}", path.display(), line, reason)
                }
            }
            LoadError::InconsistentParticleCount {
                label,
                expected,
                actual,
            } => write!(
                f,
                "timestep {} has {} particles, but earlier timesteps have {}",
                label, actual, expected
            ),
            LoadError::ShapeMismatch {
                label,
                positions,
                density,
            } => write!(
                f,
                "timestep {} has {} position components for {} density values",
                label, positions, density
            ),
            LoadError::NoParticles => write!(f, "dataset contains no particle data"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A timestep index outside `[0, timestep_count)`.
///
/// Cursor clamping should make this unreachable during rendering, so callers
/// treat it as a fatal assertion rather than a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The requested timestep index.
    pub index: usize,
    /// Number of timesteps in the store.
    pub timestep_count: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestep index {} out of range (0..{})",
            self.index, self.timestep_count
        )
    }
}

impl Error for IndexError {}
