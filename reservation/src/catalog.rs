use abi::{Room, RoomCategory};

/// The fixed set of rooms the hotel offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rooms: Vec<Room>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            rooms: vec![
                Room::new(101, RoomCategory::Standard),
                Room::new(102, RoomCategory::Standard),
                Room::new(201, RoomCategory::Deluxe),
                Room::new(202, RoomCategory::Deluxe),
                Room::new(301, RoomCategory::Suite),
            ],
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn list_available(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.is_available()).collect()
    }

    pub fn find_available(&self, number: u32) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.number() == number && r.is_available())
    }

    /// Whether a catalog room with this number is currently booked.
    pub fn is_booked(&self, number: u32) -> bool {
        self.rooms
            .iter()
            .any(|r| r.number() == number && !r.is_available())
    }

    /// No-op when the number is not in the catalog.
    pub fn mark_booked(&mut self, number: u32) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.number() == number) {
            room.book();
        }
    }

    /// No-op when the number is not in the catalog.
    pub fn mark_free(&mut self, number: u32) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.number() == number) {
            room.free();
        }
    }
}
