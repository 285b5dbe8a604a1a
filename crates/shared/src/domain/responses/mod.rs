mod analytics;
mod booking;
mod car;
mod rental;
mod user;

pub use self::analytics::{MostRentedCar, RentalAnalytics};
pub use self::booking::Booking;
pub use self::car::{Car, CarEnvelope, DateRange, MessageResponse};
pub use self::rental::{
    BookingEnvelope, BookingsEnvelope, CarRef, Rental, RentalEnvelope, RentalStatus,
    RentalsEnvelope,
};
pub use self::user::{AuthUser, LoginResponse, UserType};
