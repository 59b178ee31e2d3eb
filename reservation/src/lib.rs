use abi::{Reservation, ReservationError, Room};

mod catalog;
mod manager;
mod store;

pub use catalog::Catalog;
pub use store::FileStore;

#[derive(Debug)]
pub struct ReservationManager {
    catalog: Catalog,
    reservations: Vec<Reservation>,
    store: FileStore,
}

pub trait Rsvp {
    /// rooms that can currently be booked, in catalog order
    fn available_rooms(&self) -> Vec<&Room>;
    /// book an available room for a customer
    fn reserve(
        &mut self,
        customer_name: &str,
        room_number: u32,
    ) -> Result<Reservation, ReservationError>;
    /// cancel the oldest reservation held under this name (case-insensitive)
    fn cancel(&mut self, customer_name: &str) -> Result<Reservation, ReservationError>;
    /// all active reservations, oldest first
    fn list(&self) -> &[Reservation];
}
