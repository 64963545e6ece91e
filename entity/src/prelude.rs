pub use super::guest::Entity as Guest;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
