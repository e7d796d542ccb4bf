pub use auth::*;
pub use customer::*;
pub use reservation::*;
pub use stats::*;
pub use vehicle::*;

mod auth;
mod customer;
mod reservation;
mod stats;
mod vehicle;
