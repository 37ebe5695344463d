use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }

    /// Statuses only move forward: `pending -> processing -> completed | error`.
    /// A job that never started may still fail straight from `pending`.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Pending, JobStatus::Processing)
                | (JobStatus::Pending, JobStatus::Error)
                | (JobStatus::Processing, JobStatus::Completed)
                | (JobStatus::Processing, JobStatus::Error)
        )
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "error" => Ok(JobStatus::Error),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
