use std::str::FromStr;

pub const MENU: &str = "\n===== HOTEL RESERVATION SYSTEM =====\n\
1. View Available Rooms\n\
2. Book Room\n\
3. Cancel Reservation\n\
4. View All Bookings\n\
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewRooms,
    Book,
    Cancel,
    ViewBookings,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChoice;

/// Only the first whitespace separated token counts, anything after it is ignored.
impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split_whitespace().next().ok_or(InvalidChoice)?;
        match token.parse::<i64>().map_err(|_| InvalidChoice)? {
            1 => Ok(MenuChoice::ViewRooms),
            2 => Ok(MenuChoice::Book),
            3 => Ok(MenuChoice::Cancel),
            4 => Ok(MenuChoice::ViewBookings),
            5 => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice),
        }
    }
}
