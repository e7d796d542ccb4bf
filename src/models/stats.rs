use chrono::NaiveDate;

use crate::common::dates;
use crate::models::{Reservation, ReservationStatus, Vehicle};

/// KPIs the back-office dashboard renders, aggregated client-side from the
/// fleet and reservation listings.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DashboardStats {
    pub fleet_total: usize,
    pub fleet_available: usize,
    pub fleet_occupied: usize,

    pub reservations_in_progress: usize,
    pub revenue_in_progress: f64,

    pub pickups_today: usize,
    pub returns_today: usize,
}

impl DashboardStats {
    pub fn compute(vehicles: &[Vehicle], reservations: &[Reservation], today: NaiveDate) -> Self {
        let fleet_total = vehicles.len();
        let fleet_available = vehicles.iter().filter(|v| !v.status.is_occupied()).count();
        let fleet_occupied = fleet_total - fleet_available;

        let in_progress: Vec<&Reservation> = reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::EmAndamento)
            .collect();
        let revenue_in_progress = in_progress.iter().map(|r| r.valor_total_estimado).sum();

        let pickups_today = reservations
            .iter()
            .filter(|r| {
                r.status == ReservationStatus::Confirmada
                    && dates::is_on_day(&r.data_retirada, today)
            })
            .count();
        let returns_today = reservations
            .iter()
            .filter(|r| {
                r.status == ReservationStatus::EmAndamento
                    && dates::is_on_day(&r.data_devolucao, today)
            })
            .count();

        Self {
            fleet_total,
            fleet_available,
            fleet_occupied,
            reservations_in_progress: in_progress.len(),
            revenue_in_progress,
            pickups_today,
            returns_today,
        }
    }

    /// Pickups plus returns scheduled for today.
    pub fn actions_today(&self) -> usize {
        self.pickups_today + self.returns_today
    }
}
