use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    domain::requests::CarFilterQuery,
    errors::{Locale, ServiceError},
    utils::init_logger,
};
use std::sync::Arc;
use storefront::{
    abstract_trait::{car::CarApiClientTrait, rental::RentalApiClientTrait},
    carousel::{Carousel, SlotContent, Viewport, featured_cars},
    catalog::{unique_categories, unique_locations},
    config::Config,
    guard::Guarded,
    routes::{
        ADMIN_DASHBOARD_PATH, CARS_PATH, COMPANY_DASHBOARD_PATH, HOME_PATH, HistoryNavigator,
        LOGIN_PATH, PROFILE_PATH, nav_items,
    },
    state::AppState,
};
use tracing::{error, info};

/// Sticky viewport assumed when no layout engine reports one.
const TERMINAL_VIEWPORT: Viewport = Viewport {
    sticky_height: 0.0,
    window_height: 900.0,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;
    let navigator = Arc::new(HistoryNavigator::default());
    let state = AppState::new(&config, navigator.clone()).context("Failed to create AppState")?;

    state
        .session
        .init()
        .await
        .context("Failed to restore session")?;

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| HOME_PATH.to_string());
    let rest: Vec<String> = args.collect();

    info!("Opening {}", path);
    visit(&state, &path, &rest).await?;

    for entry in navigator.entries() {
        println!("-> {entry}");
    }

    Ok(())
}

async fn visit(state: &AppState, path: &str, args: &[String]) -> Result<()> {
    let snapshot = state.session.snapshot();
    for item in nav_items(snapshot.user.as_ref()) {
        println!("[{}] {}", item.label, item.href);
    }
    println!("theme: {}", state.theme.load().await?.as_str());

    if let Some(mut guard) = state.guard_for(path) {
        guard.mount(path).await;
        match state.shell.present(&mut guard, path) {
            Guarded::Authorized(_) => {}
            Guarded::Redirect(target) => {
                info!("{} redirected to {}", path, target.path());
                return Ok(());
            }
            Guarded::Loading => return Ok(()),
        }
    }

    let result = match path {
        HOME_PATH => home(state).await,
        CARS_PATH => cars(state).await,
        LOGIN_PATH => login(state, args).await,
        PROFILE_PATH => profile(state).await,
        COMPANY_DASHBOARD_PATH => company(state).await,
        ADMIN_DASHBOARD_PATH => admin(state).await,
        other => {
            println!("No page at {other}");
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("Page {} failed: {}", path, e);
        println!("Fel: {}", e.user_message(Locale::Sv));
    }

    Ok(())
}

async fn home(state: &AppState) -> Result<(), ServiceError> {
    let cars = state
        .di_container
        .car_client
        .find_all(&CarFilterQuery::default())
        .await?;

    let carousel = Carousel::mount(
        featured_cars(cars),
        state.carousel,
        &state.viewport,
        TERMINAL_VIEWPORT,
        0.0,
    );

    let frame = carousel.frame();
    println!("pin height: {}px", frame.pin_height);
    for slot in frame.slots {
        match slot.content {
            SlotContent::Item { item, .. } => println!(
                "{} [{}] {} {}",
                item.model_name, item.tag, item.short_description, item.details_link
            ),
            SlotContent::Placeholder(p) => println!("{}", p.message()),
        }
    }

    Ok(())
}

async fn cars(state: &AppState) -> Result<(), ServiceError> {
    let cars = state
        .di_container
        .car_client
        .find_all(&CarFilterQuery::default())
        .await?;

    println!("categories: {}", unique_categories(&cars).join(", "));
    println!("locations: {}", unique_locations(&cars).join(", "));
    for car in &cars {
        println!("{} · {} · {} SEK/dag", car.model, car.location, car.price_per_day);
    }

    Ok(())
}

async fn login(state: &AppState, args: &[String]) -> Result<(), ServiceError> {
    let [email, password] = args else {
        println!("usage: storefront /auth/login <email> <password>");
        return Ok(());
    };

    let session = state.session.login(email, password).await?;
    println!("Välkommen, {}!", session.user.name);
    Ok(())
}

async fn profile(state: &AppState) -> Result<(), ServiceError> {
    let Some(user) = state.session.snapshot().user else {
        return Ok(());
    };

    let rentals = &state.di_container.rental_client;
    let current = rentals.current_rentals_by_user(&user.id).await?;
    let bookings = rentals.bookings_by_user(&user.id).await?;

    println!("{} <{}>", user.name, user.email);
    for rental in current {
        println!(
            "{:?} {} {}..{}",
            rental.status,
            rental.car_id.id(),
            rental.start_date,
            rental.end_date
        );
    }
    for booking in bookings {
        println!("booking {} pickup {}", booking.id, booking.pickup_address);
    }

    Ok(())
}

async fn company(state: &AppState) -> Result<(), ServiceError> {
    let cars = state.di_container.car_client.find_by_organization().await?;
    println!("{} cars in your fleet", cars.len());
    for car in cars {
        println!("{} {}", car.id, car.model);
    }
    Ok(())
}

async fn admin(state: &AppState) -> Result<(), ServiceError> {
    let rentals = &state.di_container.rental_client;
    let analytics = rentals.analytics().await?;
    let pending = rentals.find_all().await?;

    println!(
        "{} rentals, {} SEK revenue",
        analytics.total_rentals, analytics.total_revenue
    );
    for car in analytics.most_rented_cars {
        println!("{} × {}", car.model, car.count);
    }
    println!("{} rental requests", pending.len());
    Ok(())
}
