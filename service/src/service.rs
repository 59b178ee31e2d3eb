use std::io::{self, BufRead, Write};

use abi::{Config, ReservationError};
use reservation::{FileStore, ReservationManager, Rsvp};
use tracing::{debug, error};

use crate::{Console, MenuChoice, RsvpService, MENU};

impl RsvpService {
    pub fn new(manager: ReservationManager) -> Self {
        Self { manager }
    }

    /// Load the session from the configured store file. A read failure is
    /// reported on `output`; whatever was read before it is kept.
    pub fn from_config<W: Write>(config: &Config, output: &mut W) -> io::Result<Self> {
        let mut manager = ReservationManager::new(FileStore::from_config(&config.store));
        if let Err(e) = manager.restore() {
            error!("{}", e);
            writeln!(output, "Error loading reservations.")?;
        }
        Ok(Self::new(manager))
    }

    pub fn manager(&self) -> &ReservationManager {
        &self.manager
    }

    /// Run the menu until the operator exits or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> io::Result<()> {
        let mut console = Console::new(input, output);

        loop {
            console.say(MENU)?;
            let Some(line) = console.prompt("Enter choice: ")? else {
                debug!("console input closed");
                console.say("Exiting system...")?;
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::ViewRooms) => self.view_available_rooms(&mut console)?,
                Ok(MenuChoice::Book) => self.book_room(&mut console)?,
                Ok(MenuChoice::Cancel) => self.cancel_reservation(&mut console)?,
                Ok(MenuChoice::ViewBookings) => self.view_bookings(&mut console)?,
                Ok(MenuChoice::Exit) => {
                    console.say("Exiting system...")?;
                    return Ok(());
                }
                Err(_) => console.say("Invalid choice.")?,
            }
        }
    }

    fn view_available_rooms<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        console.say("\nAvailable Rooms:")?;
        for room in self.manager.available_rooms() {
            console.say(room.to_string())?;
        }
        Ok(())
    }

    fn book_room<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        let Some(name) = console.prompt("Enter your name: ")? else {
            return Ok(());
        };

        self.view_available_rooms(console)?;
        let Some(room) = console.prompt("Enter room number to book: ")? else {
            return Ok(());
        };
        let Ok(room_number) = room.trim().parse::<u32>() else {
            return console.say("Room not available.");
        };

        match self.manager.reserve(&name, room_number) {
            Ok(_) => {
                Self::process_payment(console)?;
                console.say("Room booked successfully!")
            }
            Err(ReservationError::SaveFailed { .. }) => {
                Self::process_payment(console)?;
                console.say("Error saving reservation.")?;
                console.say("Room booked successfully!")
            }
            Err(_) => console.say("Room not available."),
        }
    }

    fn process_payment<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
        console.say("Processing payment...")?;
        console.say("Payment successful!")
    }

    fn cancel_reservation<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        let Some(name) = console.prompt("Enter your name: ")? else {
            return Ok(());
        };

        match self.manager.cancel(&name) {
            Ok(_) => console.say("Reservation cancelled."),
            Err(ReservationError::UpdateFailed { .. }) => {
                console.say("Error updating file.")?;
                console.say("Reservation cancelled.")
            }
            Err(_) => console.say("Reservation not found."),
        }
    }

    fn view_bookings<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say("\nAll Reservations:")?;
        for rsvp in self.manager.list() {
            console.say(rsvp.to_string())?;
        }
        Ok(())
    }
}
