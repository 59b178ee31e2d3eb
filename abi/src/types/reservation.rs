use core::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{RecordError, RoomCategory};

lazy_static! {
    static ref RECORD: Regex =
        Regex::new(r"^(?P<name>[^,]*),(?P<room>[^,]*),(?P<category>[^,]*)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub customer_name: String,
    pub room_number: u32,
    pub category: RoomCategory,
}

impl Reservation {
    pub fn new(customer_name: impl Into<String>, room_number: u32, category: RoomCategory) -> Self {
        Self {
            customer_name: customer_name.into(),
            room_number,
            category,
        }
    }

    /// One line of the store file, without the line terminator.
    ///
    /// Fields are not escaped: a name containing a comma produces a line that
    /// will not decode again.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{}",
            self.customer_name, self.room_number, self.category
        )
    }
}

/// Decodes a line produced by [`Reservation::to_record`].
impl FromStr for Reservation {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.strip_suffix('\r').unwrap_or(s);
        let cap = RECORD
            .captures(line)
            .ok_or_else(|| RecordError::FieldCount(line.split(',').count()))?;

        let room = &cap["room"];
        let room_number = room
            .parse()
            .map_err(|_| RecordError::InvalidRoomNumber(room.to_string()))?;

        Ok(Self {
            customer_name: cap["name"].to_string(),
            room_number,
            category: cap["category"].parse()?,
        })
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} | Room: {} | Category: {}",
            self.customer_name, self.room_number, self.category
        )
    }
}
