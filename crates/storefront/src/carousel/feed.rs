use shared::domain::responses::Car;

use crate::routes::car_details_path;

pub const DEFAULT_TAG: &str = "Premium";

/// A car dressed for the landing-page carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCar {
    pub car: Car,
    pub model_name: String,
    pub tag: String,
    pub short_description: String,
    pub details_link: String,
}

impl FeaturedCar {
    pub fn id(&self) -> &str {
        &self.car.id
    }

    pub fn image_url(&self) -> &str {
        self.car.image_url.as_deref().unwrap_or_default()
    }
}

impl From<Car> for FeaturedCar {
    fn from(car: Car) -> Self {
        let tag = if car.category.trim().is_empty() {
            DEFAULT_TAG.to_string()
        } else {
            car.category.clone()
        };

        Self {
            model_name: car.model.clone(),
            short_description: format!(
                "Upplev {} i {}. Hyr från {} SEK/dag.",
                car.model,
                car.location,
                format_price(car.price_per_day)
            ),
            details_link: car_details_path(&car.id),
            tag,
            car,
        }
    }
}

/// Only cars with a picture make it onto the carousel.
pub fn featured_cars(cars: Vec<Car>) -> Vec<FeaturedCar> {
    cars.into_iter()
        .filter(|car| car.image_url.as_deref().is_some_and(|url| !url.is_empty()))
        .map(FeaturedCar::from)
        .collect()
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}
