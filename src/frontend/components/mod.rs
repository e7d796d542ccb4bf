//! Reusable UI components for the FrotaNext frontend

mod alert;
mod button;
mod customer_modals;
mod footer;
mod input;
mod layout;
mod modal;
mod nav;
mod reservation_modals;
mod vehicle_card;
mod vehicle_modals;

pub use alert::{Alert, AlertVariant, ErrorAlert, SuccessAlert};
pub use button::{Button, ButtonVariant};
pub use customer_modals::CustomerDetailsModal;
pub use footer::Footer;
pub use input::{EmailInput, PasswordInput, TextInput};
pub use layout::AdminLayout;
pub use modal::{ConfirmModal, StatusMessage, StatusModal};
pub use nav::{Navbar, NavbarInternal};
pub use reservation_modals::{ModifyReservationModal, ReservationDetailsModal};
pub use vehicle_card::VehicleCard;
pub use vehicle_modals::{AddVehicleModal, VehicleDetailsModal, VehicleEditModal};
