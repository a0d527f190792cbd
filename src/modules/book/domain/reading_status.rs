use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Where the reader stands with a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    Reading,
    Completed,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "to-read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
        }
    }

    /// French label shown next to a book card.
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "À lire",
            ReadingStatus::Reading => "En cours",
            ReadingStatus::Completed => "Lu",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to-read" | "to_read" | "toread" => Ok(ReadingStatus::ToRead),
            "reading" => Ok(ReadingStatus::Reading),
            "completed" | "done" | "read" => Ok(ReadingStatus::Completed),
            other => Err(AppError::InvalidInput(format!(
                "Unknown reading status '{}'",
                other
            ))),
        }
    }
}
