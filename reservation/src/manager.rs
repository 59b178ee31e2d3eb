use abi::{same_customer, Config, Reservation, ReservationError, Room};
use tracing::{error, info, warn};

use crate::{Catalog, FileStore, ReservationManager, Rsvp};

impl Rsvp for ReservationManager {
    fn available_rooms(&self) -> Vec<&Room> {
        self.catalog.list_available()
    }

    fn reserve(
        &mut self,
        customer_name: &str,
        room_number: u32,
    ) -> Result<Reservation, ReservationError> {
        let category = self
            .catalog
            .find_available(room_number)
            .map(Room::category)
            .ok_or(ReservationError::RoomNotAvailable(room_number))?;

        self.catalog.mark_booked(room_number);
        let rsvp = Reservation::new(customer_name, room_number, category);
        self.reservations.push(rsvp.clone());
        info!("room {} booked for {:?}", room_number, customer_name);

        // the booking stands in memory even if the file could not be written
        self.store.append(&rsvp).inspect_err(|e| error!("{}", e))?;
        Ok(rsvp)
    }

    fn cancel(&mut self, customer_name: &str) -> Result<Reservation, ReservationError> {
        let idx = self
            .reservations
            .iter()
            .position(|r| same_customer(&r.customer_name, customer_name))
            .ok_or_else(|| ReservationError::ReservationNotFound(customer_name.to_string()))?;

        let rsvp = self.reservations.remove(idx);
        self.catalog.mark_free(rsvp.room_number);
        info!(
            "reservation of room {} for {:?} cancelled",
            rsvp.room_number, rsvp.customer_name
        );

        self.store
            .rewrite_all(&self.reservations)
            .inspect_err(|e| error!("{}", e))?;
        Ok(rsvp)
    }

    fn list(&self) -> &[Reservation] {
        &self.reservations
    }
}

impl ReservationManager {
    /// An empty manager: full catalog, no reservations. The store file is not read.
    pub fn new(store: FileStore) -> Self {
        Self {
            catalog: Catalog::new(),
            reservations: vec![],
            store,
        }
    }

    /// Rebuild the session state from the store file, marking every reserved
    /// room as booked.
    pub fn load(store: FileStore) -> Result<Self, ReservationError> {
        let mut manager = Self::new(store);
        manager.restore()?;
        Ok(manager)
    }

    /// Add the reservations of the store file to this session.
    ///
    /// A record for a catalog room that is already booked is skipped, so each
    /// room is held by at most one reservation. Records read before an I/O
    /// error are kept.
    pub fn restore(&mut self) -> Result<usize, ReservationError> {
        let Self {
            catalog,
            reservations,
            store,
        } = self;

        let mut restored = 0;
        let result = store.load_each(|rsvp| {
            if catalog.is_booked(rsvp.room_number) {
                warn!(
                    "skipping reservation of room {} for {:?}: room already booked",
                    rsvp.room_number, rsvp.customer_name
                );
                return;
            }
            catalog.mark_booked(rsvp.room_number);
            reservations.push(rsvp);
            restored += 1;
        });

        info!(
            "restored {} reservations from {}",
            restored,
            store.path().display()
        );
        result.map(|_| restored)
    }

    pub fn from_config(config: &Config) -> Result<Self, ReservationError> {
        Self::load(FileStore::from_config(&config.store))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use abi::RoomCategory;
    use tempfile::TempDir;

    use super::*;

    fn temp_manager() -> (TempDir, ReservationManager) {
        let dir = TempDir::new().unwrap();
        let manager = ReservationManager::load(FileStore::new(dir.path().join("bookings.txt")))
            .unwrap();
        (dir, manager)
    }

    fn available(manager: &ReservationManager) -> Vec<u32> {
        manager
            .available_rooms()
            .into_iter()
            .map(Room::number)
            .collect()
    }

    fn file_content(manager: &ReservationManager) -> String {
        fs::read_to_string(manager.store().path()).unwrap_or_default()
    }

    #[test]
    fn reserve_should_book_room_and_append_line() {
        let (_dir, mut manager) = temp_manager();

        let rsvp = manager.reserve("Alice", 101).unwrap();
        assert_eq!(rsvp, Reservation::new("Alice", 101, RoomCategory::Standard));
        assert_eq!(available(&manager), vec![102, 201, 202, 301]);
        assert_eq!(manager.list(), &[rsvp]);
        assert_eq!(file_content(&manager), "Alice,101,Standard\n");
    }

    #[test]
    fn reserve_unknown_room_should_reject() {
        let (_dir, mut manager) = temp_manager();

        let err = manager.reserve("Alice", 999).unwrap_err();
        assert_eq!(err, ReservationError::RoomNotAvailable(999));
        assert!(manager.list().is_empty());
        assert!(!manager.store().path().exists());
    }

    #[test]
    fn reserve_booked_room_should_reject() {
        let (_dir, mut manager) = temp_manager();
        manager.reserve("Alice", 301).unwrap();

        let err = manager.reserve("Bob", 301).unwrap_err();
        assert_eq!(err, ReservationError::RoomNotAvailable(301));
        assert_eq!(manager.list().len(), 1);
        assert_eq!(file_content(&manager), "Alice,301,Suite\n");
    }

    #[test]
    fn reserve_should_accept_empty_name() {
        let (_dir, mut manager) = temp_manager();
        let rsvp = manager.reserve("", 202).unwrap();
        assert_eq!(rsvp.customer_name, "");
        assert_eq!(file_content(&manager), ",202,Deluxe\n");
    }

    #[test]
    fn cancel_should_ignore_case_and_free_room() {
        let (_dir, mut manager) = temp_manager();
        manager.reserve("Bob", 201).unwrap();

        let rsvp = manager.cancel("bob").unwrap();
        assert_eq!(rsvp, Reservation::new("Bob", 201, RoomCategory::Deluxe));
        assert!(manager.list().is_empty());
        assert!(available(&manager).contains(&201));
        assert_eq!(file_content(&manager), "");
    }

    #[test]
    fn cancel_should_remove_only_first_match() {
        let (_dir, mut manager) = temp_manager();
        manager.reserve("Alice", 101).unwrap();
        manager.reserve("Bob", 102).unwrap();
        manager.reserve("ALICE", 201).unwrap();
        manager.reserve("Carol", 202).unwrap();

        manager.cancel("alice").unwrap();
        let names: Vec<_> = manager
            .list()
            .iter()
            .map(|r| (r.customer_name.as_str(), r.room_number))
            .collect();
        assert_eq!(names, vec![("Bob", 102), ("ALICE", 201), ("Carol", 202)]);
        assert_eq!(available(&manager), vec![101, 301]);
        assert_eq!(
            file_content(&manager),
            "Bob,102,Standard\nALICE,201,Deluxe\nCarol,202,Deluxe\n"
        );

        manager.cancel("Alice").unwrap();
        assert_eq!(manager.list().len(), 2);
        assert_eq!(available(&manager), vec![101, 201, 301]);
    }

    #[test]
    fn cancel_unknown_name_should_not_touch_file() {
        let (_dir, mut manager) = temp_manager();

        let err = manager.cancel("Nobody").unwrap_err();
        assert_eq!(
            err,
            ReservationError::ReservationNotFound("Nobody".to_string())
        );
        assert!(!manager.store().path().exists());
    }

    #[test]
    fn load_should_restore_reservations_and_room_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.txt");

        let mut manager = ReservationManager::load(FileStore::new(&path)).unwrap();
        manager.reserve("Alice", 101).unwrap();
        manager.reserve("Bob", 201).unwrap();
        manager.reserve("Carol", 301).unwrap();
        let before = manager.list().to_vec();
        drop(manager);

        let manager = ReservationManager::load(FileStore::new(&path)).unwrap();
        assert_eq!(manager.list(), before.as_slice());
        assert_eq!(available(&manager), vec![102, 202]);
    }

    #[test]
    fn load_should_keep_reservations_for_unknown_rooms() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, "Zed,999,Suite\nAlice,102,Standard\n").unwrap();

        let manager = ReservationManager::load(FileStore::new(&path)).unwrap();
        assert_eq!(manager.list().len(), 2);
        assert_eq!(available(&manager), vec![101, 201, 202, 301]);
    }

    #[test]
    fn load_should_skip_duplicate_room() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, "A,101,Standard\nB,101,Standard\nC,201,Deluxe\n").unwrap();

        let mut manager = ReservationManager::load(FileStore::new(&path)).unwrap();
        assert_eq!(
            manager.list(),
            &[
                Reservation::new("A", 101, RoomCategory::Standard),
                Reservation::new("C", 201, RoomCategory::Deluxe),
            ]
        );

        manager.cancel("A").unwrap();
        assert!(manager.cancel("B").is_err());
        manager.reserve("D", 101).unwrap();
        let on_101 = manager.list().iter().filter(|r| r.room_number == 101).count();
        assert_eq!(on_101, 1);
        assert_eq!(available(&manager), vec![102, 202, 301]);
    }

    #[test]
    fn restore_should_keep_records_read_before_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, b"Alice,101,Standard\n\xff\nBob,201,Deluxe\n").unwrap();

        let mut manager = ReservationManager::new(FileStore::new(&path));
        let err = manager.restore().unwrap_err();
        assert!(matches!(err, ReservationError::LoadFailed { .. }));
        assert_eq!(
            manager.list(),
            &[Reservation::new("Alice", 101, RoomCategory::Standard)]
        );
        assert_eq!(available(&manager), vec![102, 201, 202, 301]);
    }

    #[test]
    fn from_config_should_use_store_path() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.store.path = dir.path().join("custom.txt");

        let mut manager = ReservationManager::from_config(&config).unwrap();
        manager.reserve("Alice", 102).unwrap();
        assert_eq!(
            fs::read_to_string(&config.store.path).unwrap(),
            "Alice,102,Standard\n"
        );
    }

    #[test]
    fn failed_save_should_keep_booking_in_memory() {
        let dir = TempDir::new().unwrap();
        let mut manager =
            ReservationManager::new(FileStore::new(dir.path().join("no-dir").join("b.txt")));

        let err = manager.reserve("Alice", 101).unwrap_err();
        assert!(matches!(err, ReservationError::SaveFailed { .. }));
        assert_eq!(manager.list().len(), 1);
        assert!(!available(&manager).contains(&101));

        let err = manager.cancel("Alice").unwrap_err();
        assert!(matches!(err, ReservationError::UpdateFailed { .. }));
        assert!(manager.list().is_empty());
        assert!(available(&manager).contains(&101));
    }
}
