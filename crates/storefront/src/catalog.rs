use shared::domain::responses::{AuthUser, Car, UserType};

/// Search box plus the two dropdown filters on the car listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    pub search: String,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl CarFilter {
    pub fn matches(&self, car: &Car) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = car.model.to_lowercase().contains(&term)
            || car.location.to_lowercase().contains(&term)
            || car.category.to_lowercase().contains(&term);

        let matches_category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .is_none_or(|c| car.category == c);
        let matches_location = self
            .location
            .as_deref()
            .filter(|l| !l.is_empty())
            .is_none_or(|l| car.location == l);

        matches_search && matches_category && matches_location
    }

    pub fn apply<'a>(&self, cars: &'a [Car]) -> Vec<&'a Car> {
        cars.iter().filter(|car| self.matches(car)).collect()
    }
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Distinct non-empty categories in first-seen order.
pub fn unique_categories(cars: &[Car]) -> Vec<String> {
    unique(cars.iter().map(|car| car.category.as_str()))
}

pub fn unique_locations(cars: &[Car]) -> Vec<String> {
    unique(cars.iter().map(|car| car.location.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarAction {
    /// Show the booking form.
    Book,
    /// The visitor's own company lists this car.
    ManageFleet,
    None,
}

/// What the car page offers the signed-in visitor. Nobody books a car their
/// own organization rents out.
pub fn car_action(user: Option<&AuthUser>, car: &Car) -> CarAction {
    let Some(user) = user else {
        return CarAction::None;
    };

    let own_car = user.organization_number.as_deref() == Some(car.organization_number.as_str());

    if (user.is_admin || user.user_type == Some(UserType::Individual)) && !own_car {
        CarAction::Book
    } else if user.user_type == Some(UserType::Company) && own_car {
        CarAction::ManageFleet
    } else {
        CarAction::None
    }
}
