mod console;
mod menu;
mod service;

use reservation::ReservationManager;

pub use console::Console;
pub use menu::{InvalidChoice, MenuChoice, MENU};

/// The interactive front desk: a menu loop over one reservation manager.
pub struct RsvpService {
    manager: ReservationManager,
}
