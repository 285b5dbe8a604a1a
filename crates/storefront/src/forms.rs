use parking_lot::Mutex;
use shared::{
    domain::{requests::CreateRentalRequest, responses::Rental},
    errors::ServiceError,
    utils::parse_iso_date,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{info, warn};

use crate::abstract_trait::rental::DynRentalApiClient;

pub const BOOKING_SENT: &str =
    "Din hyresförfrågan har skickats! Du kommer att meddelas när den godkänns.";
pub const START_BEFORE_END: &str = "Startdatum måste vara före slutdatum.";
pub const DATES_REQUIRED: &str = "Välj både startdatum och slutdatum.";
pub const BOOKING_FAILED: &str = "Kunde inte skicka hyresförfrågan.";

/// Allows one submission at a time. The slot is released when the
/// [`SubmitTicket`] is dropped.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGate {
    pub fn try_acquire(&self) -> Option<SubmitTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitTicket {
                in_flight: self.in_flight.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct SubmitTicket {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub start_date: String,
    pub end_date: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug)]
pub enum Submission {
    Sent(Rental),
    /// Another submission is still in flight.
    Busy,
    Invalid(String),
    Failed(ServiceError),
}

/// Rental request form on the car page.
pub struct BookingForm {
    car_id: String,
    rentals: DynRentalApiClient,
    gate: SubmitGate,
    state: Mutex<BookingFormState>,
}

impl BookingForm {
    pub fn new(car_id: &str, rentals: DynRentalApiClient) -> Self {
        Self {
            car_id: car_id.to_string(),
            rentals,
            gate: SubmitGate::default(),
            state: Mutex::new(BookingFormState::default()),
        }
    }

    pub fn set_dates(&self, start: &str, end: &str) {
        let mut state = self.state.lock();
        state.start_date = start.to_string();
        state.end_date = end.to_string();
    }

    pub fn state(&self) -> BookingFormState {
        self.state.lock().clone()
    }

    /// Mirrors the disabled submit button.
    pub fn is_submitting(&self) -> bool {
        self.gate.is_busy()
    }

    pub async fn submit(&self) -> Submission {
        let Some(_ticket) = self.gate.try_acquire() else {
            return Submission::Busy;
        };

        let (start, end) = {
            let mut state = self.state.lock();
            state.error = None;
            state.success = None;
            (
                parse_iso_date(&state.start_date),
                parse_iso_date(&state.end_date),
            )
        };

        let request = match (start, end) {
            (Some(start_date), Some(end_date)) if start_date < end_date => CreateRentalRequest {
                car_id: self.car_id.clone(),
                start_date,
                end_date,
            },
            (Some(_), Some(_)) => return self.invalid(START_BEFORE_END),
            _ => return self.invalid(DATES_REQUIRED),
        };

        match self.rentals.create(&request).await {
            Ok(rental) => {
                info!("Rental request {} sent for car {}", rental.id, self.car_id);
                let mut state = self.state.lock();
                state.success = Some(BOOKING_SENT.to_string());
                state.start_date.clear();
                state.end_date.clear();
                Submission::Sent(rental)
            }
            Err(e) => {
                warn!("Rental request for car {} failed: {}", self.car_id, e);
                let message = match &e {
                    ServiceError::Api { message, .. } if !message.is_empty() => message.clone(),
                    ServiceError::Validation(errors) if !errors.is_empty() => errors.join("; "),
                    _ => BOOKING_FAILED.to_string(),
                };
                self.state.lock().error = Some(message);
                Submission::Failed(e)
            }
        }
    }

    fn invalid(&self, message: &str) -> Submission {
        self.state.lock().error = Some(message.to_string());
        Submission::Invalid(message.to_string())
    }
}
