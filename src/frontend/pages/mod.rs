//! Page components, one per routed view.

mod admin_customers;
mod admin_dashboard;
mod admin_fleet;
mod admin_login;
mod admin_reservations;
mod dashboard;
mod drivers;
mod fleet;
mod home;
mod login;
mod my_reservations;
mod new_reservation;
mod profile;
mod register;

pub use admin_customers::AdminCustomersPage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_fleet::AdminFleetPage;
pub use admin_login::AdminLoginPage;
pub use admin_reservations::AdminReservationsPage;
pub use dashboard::DashboardPage;
pub use drivers::DriversPage;
pub use fleet::FleetPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_reservations::MyReservationsPage;
pub use new_reservation::{NewReservationPage, WizardStep};
pub use profile::ProfilePage;
pub use register::RegisterPage;
