use crate::record::AssessmentRecord;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read assessment record from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("assessment record at {path} is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One fetch of the current assessment record; resolves or fails, no retries.
pub trait RecordSource {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<AssessmentRecord, SourceError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<AssessmentRecord, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.describe(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            path: self.describe(),
            source,
        })
    }
}
