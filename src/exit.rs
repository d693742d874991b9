// src/exit.rs
//! Standardized process exit codes for `rankmap`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankMapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankMapExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, regex compilation).
    Error = 1,
    /// Configuration or arguments rejected.
    InvalidInput = 2,
    /// A persisted map is missing or corrupt and must be regenerated.
    ArtifactMissing = 3,
}

impl RankMapExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code that matches an error bubbled up from a handler.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankMapError>() {
            Some(e) if e.is_stale_artifact() => Self::ArtifactMissing,
            Some(RankMapError::Config(_)) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for RankMapExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
