use std::{
    env,
    path::{Path, PathBuf},
};

/// Configuration for the window and application environment.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    root_dir: PathBuf,
    relative_log_file_path: PathBuf,

    title: String,
    inner_size: (u32, u32),
    maximized: bool,
    always_on_top: bool,
}

static_assertions::assert_impl_all!(Config: Send, Sync);

impl Default for Config {
    fn default() -> Self {
        let root_dir = if cfg!(debug_assertions) {
            env::current_dir().expect("failed to locate current working directory")
        } else {
            let mut path = env::current_exe().expect("failed to locate executable");
            path.pop();
            path
        };

        Self {
            root_dir,
            relative_log_file_path: "log.txt".into(),

            title: String::new(),
            inner_size: (800, 600),
            maximized: false,
            always_on_top: cfg!(debug_assertions),
        }
    }
}

impl Config {
    /// Returns the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the directory that data and log files are resolved against.
    ///
    /// By default:
    /// - In debug mode, this is the current working directory.
    /// - In release mode, this is the directory containing the executable.
    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    /// Sets the directory that data and log files are resolved against.
    pub fn with_root_dir(mut self, root_dir: impl AsRef<Path>) -> Self {
        self.root_dir = root_dir.as_ref().to_path_buf();
        self
    }

    /// Returns the absolute log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.root_dir.join(&self.relative_log_file_path)
    }

    /// Sets the log file path relative to the root directory.
    pub fn with_relative_log_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.relative_log_file_path = path.as_ref().to_path_buf();
        self
    }

    /// Returns the window title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the initial window size in logical pixels.
    pub fn inner_size(&self) -> (u32, u32) {
        self.inner_size
    }

    /// Sets the initial window size in logical pixels.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.inner_size = (width, height);
        self
    }

    /// Returns whether the window should start maximized.
    pub fn maximized(&self) -> bool {
        self.maximized
    }

    /// Sets whether the window should start maximized.
    pub fn with_maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Returns whether the window should stay on top of other windows.
    ///
    /// The default is true in debug mode and false in release mode.
    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// Sets whether the window should stay on top of other windows.
    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }
}
