mod reservation;
mod room;

pub use reservation::*;
pub use room::*;

/// Case-insensitive name comparison used to match reservations to customers.
///
/// Characters are folded one at a time, so context-dependent mappings such as
/// the Greek final sigma do not apply.
pub fn same_customer(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().eq(y.to_lowercase())
        })
}
