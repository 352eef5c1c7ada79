use std::path::{Path, PathBuf};

/// Which timestep files to load.
///
/// The simulation numbers its output files by step; the viewer loads the
/// half-open range `start..end` in increments of `step`, giving labels like
/// `050`, `100`, `150`.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub start: u32,
    pub end: u32,
    pub step: u32,
    pub dir_name: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start: 50,
            end: 200,
            step: 50,
            dir_name: "data".to_string(),
        }
    }
}

impl DatasetConfig {
    /// Zero-padded step labels, in playback order.
    pub fn step_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        let mut value = self.start;
        while value < self.end {
            labels.push(format!("{:03}", value));
            value += self.step;
        }
        labels
    }

    /// The dataset directory, resolved against the app's root directory.
    pub fn data_dir(&self, root_dir: &Path) -> PathBuf {
        root_dir.join(&self.dir_name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_labels() {
        let labels = DatasetConfig::default().step_labels();
        assert_eq!(labels, vec!["050", "100", "150"]);
    }

    #[test]
    fn end_is_exclusive() {
        let config = DatasetConfig {
            start: 10,
            end: 30,
            step: 10,
            ..DatasetConfig::default()
        };
        assert_eq!(config.step_labels(), vec!["010", "020"]);
    }
}
