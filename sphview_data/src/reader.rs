//! Text reader for simulation output files.
//!
//! Each timestep lives in its own file, one particle per line with four
//! whitespace separated floats: `x y z density`. Blank lines and lines
//! starting with `#` are skipped.

use std::{fs, path::Path};

use crate::{LoadError, Timestep};

/// File name for a given step label, e.g. `out_050.txt` for label `050`.
pub fn timestep_file_name(label: &str) -> String {
    format!("out_{}.txt", label)
}

pub(crate) fn read_timestep(path: &Path, label: &str) -> Result<Timestep, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut positions: Vec<f32> = Vec::new();
    let mut density: Vec<f32> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(LoadError::Malformed {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        }

        let mut values = [0.0f32; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.parse().map_err(|_| LoadError::Malformed {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("invalid float {:?}", field),
            })?;
        }

        positions.extend_from_slice(&values[..3]);
        density.push(values[3]);
    }

    if density.is_empty() {
        return Err(LoadError::Malformed {
            path: path.to_path_buf(),
            line: 0,
            reason: "no particle data".to_string(),
        });
    }

    Timestep::new(label.to_string(), positions, density)
}

#[cfg(test)]
mod test {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_particles_and_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "out_050.txt",
            "# header\n1.0 2.0 3.0 0.5\n\n-1.0 -2.0 -3.0 1.5\n",
        );

        let timestep = read_timestep(&path, "050").unwrap();
        assert_eq!(timestep.label(), "050");
        assert_eq!(timestep.particle_count(), 2);
        assert_eq!(timestep.positions(), &[1.0, 2.0, 3.0, -1.0, -2.0, -3.0]);
        assert_eq!(timestep.density(), &[0.5, 1.5]);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "out_100.txt", "1.0 2.0 3.0\n");

        match read_timestep(&path, "100") {
            Err(LoadError::Malformed { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn unparsable_float_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "out_100.txt", "1.0 2.0 3.0 0.5\n1.0 x 3.0 0.5\n");

        match read_timestep(&path, "100") {
            Err(LoadError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_999.txt");

        assert!(matches!(
            read_timestep(&path, "999"),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "out_050.txt", "# nothing here\n");

        assert!(matches!(
            read_timestep(&path, "050"),
            Err(LoadError::Malformed { line: 0, .. })
        ));
    }
}
