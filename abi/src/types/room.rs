use core::fmt;
use std::str::FromStr;

use crate::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomCategory::Standard => write!(f, "Standard"),
            RoomCategory::Deluxe => write!(f, "Deluxe"),
            RoomCategory::Suite => write!(f, "Suite"),
        }
    }
}

impl FromStr for RoomCategory {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(RoomCategory::Standard),
            "Deluxe" => Ok(RoomCategory::Deluxe),
            "Suite" => Ok(RoomCategory::Suite),
            _ => Err(RecordError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: u32,
    category: RoomCategory,
    available: bool,
}

impl Room {
    /// A new room starts out available.
    pub fn new(number: u32, category: RoomCategory) -> Self {
        Self {
            number,
            category,
            available: true,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn book(&mut self) {
        self.available = false;
    }

    pub fn free(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} - {}", self.number, self.category)
    }
}
