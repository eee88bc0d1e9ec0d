//! Configuration of [`SampleLogger`](crate::SampleLogger).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Configuration of [`SampleLogger`](crate::SampleLogger).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LoggerConfig {
    /// Time between two consecutive samples in seconds.
    pub dt: f32,

    /// Size of the rendered figures in pixels.
    pub figure_size: (u32, u32),

    /// Directory where figures are written.
    ///
    /// If `None`, figures are written next to the file given to
    /// [`SampleLogger::plot_states`](crate::SampleLogger::plot_states).
    pub figure_dir: Option<PathBuf>,

    /// If `false`, figures are never drawn. The gait table is still exported.
    pub render: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            dt: 0.02,
            figure_size: (1800, 1200),
            figure_dir: None,
            render: true,
        }
    }
}

impl LoggerConfig {
    /// Sets the time between samples.
    pub fn dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the size of the figures in pixels.
    pub fn figure_size(mut self, width: u32, height: u32) -> Self {
        self.figure_size = (width, height);
        self
    }

    /// Sets the directory of the figures.
    pub fn figure_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.figure_dir = Some(dir.into());
        self
    }

    /// Enables or disables drawing of figures.
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Returns the path of a figure for the given output file.
    ///
    /// The figure is named `<stem>_<name>.svg`, where `<stem>` is the file stem of `output`.
    pub fn figure_path(&self, output: &Path, name: &str) -> PathBuf {
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("plot");
        let dir = match &self.figure_dir {
            Some(dir) => dir.clone(),
            None => output
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
        };
        dir.join(format!("{}_{}.svg", stem, name))
    }

    /// Constructs [`LoggerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`LoggerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
