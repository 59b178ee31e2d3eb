mod record;

use std::{io, path::PathBuf};

use thiserror::Error;

pub use record::*;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("room not available: {0}")]
    RoomNotAvailable(u32),

    #[error("reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("failed to save reservation to {}: {source}", .path.display())]
    SaveFailed { path: PathBuf, source: io::Error },

    #[error("failed to update {}: {source}", .path.display())]
    UpdateFailed { path: PathBuf, source: io::Error },

    #[error("failed to load reservations from {}: {source}", .path.display())]
    LoadFailed { path: PathBuf, source: io::Error },
}

impl PartialEq for ReservationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // io::Error has no PartialEq, comparing the kind is enough for callers
            (
                Self::SaveFailed { path: p1, source: s1 },
                Self::SaveFailed { path: p2, source: s2 },
            )
            | (
                Self::UpdateFailed { path: p1, source: s1 },
                Self::UpdateFailed { path: p2, source: s2 },
            )
            | (
                Self::LoadFailed { path: p1, source: s1 },
                Self::LoadFailed { path: p2, source: s2 },
            ) => p1 == p2 && s1.kind() == s2.kind(),
            (Self::RoomNotAvailable(v1), Self::RoomNotAvailable(v2)) => v1 == v2,
            (Self::ReservationNotFound(v1), Self::ReservationNotFound(v2)) => v1 == v2,
            _ => false,
        }
    }
}
