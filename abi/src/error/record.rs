use thiserror::Error;

/// Why a line of the store file could not be decoded into a reservation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 3 comma separated fields, found {0}")]
    FieldCount(usize),

    #[error("invalid room number: {0:?}")]
    InvalidRoomNumber(String),

    #[error("invalid room category: {0:?}")]
    InvalidCategory(String),
}
