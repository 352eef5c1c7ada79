use std::path::Path;

use crate::{reader, IndexError, LoadError};

/// One snapshot of all particles at a discrete point in simulated time.
#[derive(Debug, Clone)]
pub struct Timestep {
    label: String,
    positions: Vec<f32>,
    density: Vec<f32>,
}

impl Timestep {
    /// Creates a timestep, checking that `positions` holds three floats per
    /// density value.
    pub fn new(label: String, positions: Vec<f32>, density: Vec<f32>) -> Result<Self, LoadError> {
        if positions.len() != 3 * density.len() {
            return Err(LoadError::ShapeMismatch {
                label,
                positions: positions.len(),
                density: density.len(),
            });
        }
        Ok(Self {
            label,
            positions,
            density,
        })
    }

    /// The source label this timestep was loaded under, e.g. `050`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of particles in this timestep.
    pub fn particle_count(&self) -> usize {
        self.density.len()
    }

    /// Flattened xyz triples, `3 * particle_count` floats.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// One density scalar per particle.
    pub fn density(&self) -> &[f32] {
        &self.density
    }
}

/// A read-only view of one timestep's attribute arrays.
#[derive(Debug, Clone, Copy)]
pub struct TimestepSlice<'a> {
    /// The timestep's source label.
    pub label: &'a str,
    /// Flattened xyz triples.
    pub positions: &'a [f32],
    /// One density scalar per particle.
    pub density: &'a [f32],
}

/// All loaded timesteps of a simulation run.
///
/// Built once at startup and read-only afterward, so it may be read freely
/// without synchronization.
#[derive(Debug)]
pub struct TimeSeriesStore {
    timesteps: Vec<Timestep>,
    particle_count: usize,
    density_range: [f32; 2],
}

impl TimeSeriesStore {
    /// Loads one timestep file per label from `data_dir`.
    ///
    /// The first timestep's particle count becomes the fixed count for the
    /// whole store; a missing or malformed file, or a timestep with a
    /// different count, fails the entire load.
    pub fn load(data_dir: &Path, labels: &[String]) -> Result<Self, LoadError> {
        let mut timesteps = Vec::with_capacity(labels.len());
        for label in labels {
            let path = data_dir.join(reader::timestep_file_name(label));
            tracing::debug!("loading timestep {} from {}", label, path.display());
            timesteps.push(reader::read_timestep(&path, label)?);
        }
        Self::from_timesteps(timesteps)
    }

    /// Builds a store from already constructed timesteps, enforcing a
    /// consistent particle count. Also used to assemble synthetic datasets in
    /// tests.
    pub fn from_timesteps(timesteps: Vec<Timestep>) -> Result<Self, LoadError> {
        let first = timesteps.first().ok_or(LoadError::NoParticles)?;
        let particle_count = first.particle_count();
        if particle_count == 0 {
            return Err(LoadError::NoParticles);
        }

        for timestep in &timesteps[1..] {
            if timestep.particle_count() != particle_count {
                return Err(LoadError::InconsistentParticleCount {
                    label: timestep.label.clone(),
                    expected: particle_count,
                    actual: timestep.particle_count(),
                });
            }
        }

        let mut density_range = [f32::INFINITY, f32::NEG_INFINITY];
        for value in timesteps.iter().flat_map(|t| &t.density) {
            density_range[0] = density_range[0].min(*value);
            density_range[1] = density_range[1].max(*value);
        }

        tracing::info!(
            "loaded {} timesteps with {} particles each",
            timesteps.len(),
            particle_count
        );

        Ok(Self {
            timesteps,
            particle_count,
            density_range,
        })
    }

    /// Number of loaded timesteps.
    pub fn timestep_count(&self) -> usize {
        self.timesteps.len()
    }

    /// Number of particles per timestep, constant across the store.
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Minimum and maximum density over the whole dataset.
    pub fn density_range(&self) -> [f32; 2] {
        self.density_range
    }

    /// Returns read-only views of the given timestep's attribute arrays.
    pub fn try_slice(&self, index: usize) -> Result<TimestepSlice<'_>, IndexError> {
        match self.timesteps.get(index) {
            Some(timestep) => Ok(TimestepSlice {
                label: &timestep.label,
                positions: &timestep.positions,
                density: &timestep.density,
            }),
            None => Err(IndexError {
                index,
                timestep_count: self.timesteps.len(),
            }),
        }
    }

    /// Like [Self::try_slice], but panics on an out-of-range index.
    ///
    /// The playback cursor clamps to the loaded range, so an out-of-range
    /// index here is an invariant violation; aborting beats silently
    /// rendering stale data.
    pub fn slice(&self, index: usize) -> TimestepSlice<'_> {
        match self.try_slice(index) {
            Ok(slice) => slice,
            Err(error) => panic!("{}", error),
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    fn timestep(label: &str, particles: &[[f32; 4]]) -> Timestep {
        let mut positions = Vec::new();
        let mut density = Vec::new();
        for particle in particles {
            positions.extend_from_slice(&particle[..3]);
            density.push(particle[3]);
        }
        Timestep::new(label.to_string(), positions, density).unwrap()
    }

    fn three_step_store() -> TimeSeriesStore {
        TimeSeriesStore::from_timesteps(vec![
            timestep("050", &[[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 2.0]]),
            timestep("100", &[[0.0, 1.0, 0.0, 3.0], [1.0, 1.0, 0.0, 4.0]]),
            timestep("150", &[[0.0, 2.0, 0.0, 5.0], [1.0, 2.0, 0.0, 6.0]]),
        ])
        .unwrap()
    }

    fn labels() -> Vec<String> {
        vec!["050".to_string(), "100".to_string(), "150".to_string()]
    }

    #[test]
    fn load_reads_one_file_per_label() {
        let dir = tempfile::tempdir().unwrap();
        for label in ["050", "100", "150"] {
            let path = dir.path().join(format!("out_{}.txt", label));
            fs::write(&path, "0.0 0.0 0.0 1.0\n1.0 0.0 0.0 2.0\n").unwrap();
        }

        let store = TimeSeriesStore::load(dir.path(), &labels()).unwrap();
        assert_eq!(store.timestep_count(), 3);
        assert_eq!(store.particle_count(), 2);
    }

    #[test]
    fn load_fails_on_one_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        for label in ["050", "150"] {
            let path = dir.path().join(format!("out_{}.txt", label));
            fs::write(&path, "0.0 0.0 0.0 1.0\n").unwrap();
        }
        fs::write(dir.path().join("out_100.txt"), "0.0 0.0 1.0\n").unwrap();

        match TimeSeriesStore::load(dir.path(), &labels()) {
            Err(LoadError::Malformed { path, line, .. }) => {
                assert!(path.ends_with("out_100.txt"));
                assert_eq!(line, 1);
            }
            other => panic!("expected Malformed, got {:?}", other.err()),
        }
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        for label in ["050", "100"] {
            let path = dir.path().join(format!("out_{}.txt", label));
            fs::write(&path, "0.0 0.0 0.0 1.0\n").unwrap();
        }

        assert!(matches!(
            TimeSeriesStore::load(dir.path(), &labels()),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn counts_match_input() {
        let store = three_step_store();
        assert_eq!(store.timestep_count(), 3);
        assert_eq!(store.particle_count(), 2);
    }

    #[test]
    fn density_range_spans_all_timesteps() {
        let store = three_step_store();
        assert_eq!(store.density_range(), [1.0, 6.0]);
    }

    #[test]
    fn inconsistent_count_fails() {
        let result = TimeSeriesStore::from_timesteps(vec![
            timestep("050", &[[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 2.0]]),
            timestep("100", &[[0.0, 1.0, 0.0, 3.0]]),
        ]);

        match result {
            Err(LoadError::InconsistentParticleCount {
                label,
                expected,
                actual,
            }) => {
                assert_eq!(label, "100");
                assert_eq!((expected, actual), (2, 1));
            }
            other => panic!("expected InconsistentParticleCount, got {:?}", other.err()),
        }
    }

    #[test]
    fn empty_dataset_fails() {
        assert!(matches!(
            TimeSeriesStore::from_timesteps(Vec::new()),
            Err(LoadError::NoParticles)
        ));
    }

    #[test]
    fn mismatched_shape_fails() {
        assert!(matches!(
            Timestep::new("050".to_string(), vec![0.0; 5], vec![0.0; 2]),
            Err(LoadError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn slice_views_match_timestep() {
        let store = three_step_store();
        let slice = store.slice(1);
        assert_eq!(slice.label, "100");
        assert_eq!(slice.positions, &[0.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(slice.density, &[3.0, 4.0]);
    }

    #[test]
    fn try_slice_out_of_range() {
        let store = three_step_store();
        match store.try_slice(3) {
            Err(error) => assert_eq!(
                error,
                IndexError {
                    index: 3,
                    timestep_count: 3
                }
            ),
            Ok(_) => panic!("expected IndexError"),
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn slice_out_of_range_panics() {
        three_step_store().slice(3);
    }
}
