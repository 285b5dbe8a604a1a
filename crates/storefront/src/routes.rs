use parking_lot::Mutex;
use shared::domain::responses::AuthUser;
use tracing::debug;

use crate::{
    abstract_trait::navigator::NavigatorTrait,
    guard::{Role, profile_role},
};

pub const HOME_PATH: &str = "/";
pub const CARS_PATH: &str = "/cars";
pub const CONTACT_PATH: &str = "/contact";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const PROFILE_PATH: &str = "/account/profile";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const COMPANY_DASHBOARD_PATH: &str = "/company/dashboard";

pub fn car_details_path(id: &str) -> String {
    format!("{CARS_PATH}/{id}")
}

/// Pages that sit behind an access guard, with the role each one needs.
pub const PROTECTED_ROUTES: &[(&str, Role)] = &[
    (ADMIN_DASHBOARD_PATH, Role::Admin),
    (COMPANY_DASHBOARD_PATH, Role::Company),
    (PROFILE_PATH, Role::Individual),
];

/// Role a page's guard is mounted with; `None` for public pages.
pub fn required_role(path: &str) -> Option<Role> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    };

    PROTECTED_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, role)| *role)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Header links for the current visitor. Dashboards are offered to exactly
/// the roles their guards admit.
pub fn nav_items(user: Option<&AuthUser>) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("Hem", HOME_PATH),
        NavItem::new("Bilar", CARS_PATH),
        NavItem::new("Kontakt", CONTACT_PATH),
    ];

    let Some(user) = user else {
        items.push(NavItem::new("Logga In", LOGIN_PATH));
        items.push(NavItem::new("Registrera", REGISTER_PATH));
        return items;
    };

    let name = if user.name.trim().is_empty() {
        "Användare"
    } else {
        user.name.as_str()
    };
    items.push(NavItem::new(format!("Välkommen, {name}!"), PROFILE_PATH));

    if let Some(role) = profile_role(user) {
        if role.admits(Some(Role::Admin)) {
            items.push(NavItem::new("Admin", ADMIN_DASHBOARD_PATH));
        }
        if role.admits(Some(Role::Company)) {
            items.push(NavItem::new("Företag", COMPANY_DASHBOARD_PATH));
        }
    }

    items
}

/// In-process navigator that records every push. Used by the binary and by
/// tests in place of a browser router.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.entries.lock().last().cloned()
    }
}

impl NavigatorTrait for HistoryNavigator {
    fn push(&self, path: &str) {
        debug!("Navigating to {}", path);
        self.entries.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::user;
    use shared::domain::responses::UserType;

    fn hrefs(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.href.as_str()).collect()
    }

    #[test]
    fn protected_routes_carry_their_roles() {
        assert_eq!(required_role("/admin/dashboard"), Some(Role::Admin));
        assert_eq!(required_role("/company/dashboard/"), Some(Role::Company));
        assert_eq!(
            required_role("/account/profile?tab=bookings"),
            Some(Role::Individual)
        );
        assert_eq!(required_role("/cars"), None);
        assert_eq!(required_role("/"), None);
    }

    #[test]
    fn visitors_see_sign_in_links() {
        assert_eq!(
            hrefs(&nav_items(None)),
            ["/", "/cars", "/contact", "/auth/login", "/auth/register"]
        );
    }

    #[test]
    fn dashboards_follow_the_effective_role() {
        let company = nav_items(Some(&user(UserType::Company, false)));
        assert_eq!(
            hrefs(&company)[3..],
            ["/account/profile", "/company/dashboard"]
        );

        let admin = nav_items(Some(&user(UserType::Individual, true)));
        assert_eq!(
            hrefs(&admin)[3..],
            ["/account/profile", "/admin/dashboard", "/company/dashboard"]
        );

        let individual = nav_items(Some(&user(UserType::Individual, false)));
        assert_eq!(individual[3].label, "Välkommen, Ada Lind!");
        assert_eq!(individual.len(), 4);
    }

    #[test]
    fn history_records_pushes() {
        let history = HistoryNavigator::default();
        history.push("/auth/login");
        history.push("/");
        assert_eq!(history.current().as_deref(), Some("/"));
        assert_eq!(history.entries().len(), 2);
    }
}
