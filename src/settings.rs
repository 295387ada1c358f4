use std::{fs, io, path::Path, path::PathBuf};

use log::LevelFilter;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Dims, solver::SolverKind};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

/// 16 columns by 12 rows.
pub const DEFAULT_SIZE: Dims = Dims(16, 12);

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub size: Option<Dims>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub solver: Option<SolverKind>,
    #[serde(default)]
    pub rounds: Option<u32>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size(mut self, value: Dims) -> Self {
        self.size = Some(value);
        self
    }

    pub fn get_size(&self) -> Dims {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_solver(mut self, value: SolverKind) -> Self {
        self.solver = Some(value);
        self
    }

    pub fn get_solver(&self) -> SolverKind {
        self.solver.unwrap_or_default()
    }

    pub fn set_rounds(mut self, value: u32) -> Self {
        self.rounds = Some(value);
        self
    }

    /// `None` means keep going forever.
    pub fn get_rounds(&self) -> Option<u32> {
        self.rounds
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::preference_dir().map(|dir| dir.join("pmaze").join("settings.ron"))
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(source)?)
    }

    /// Reads the settings at `path`, creating the file with the defaults when
    /// it doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_ron(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, DEFAULT_SETTINGS)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }
}
