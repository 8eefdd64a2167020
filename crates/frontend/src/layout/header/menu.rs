//! Entries of the profile dropdown in the header

use contracts::system::auth::UserProfile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Informational row, nothing happens on click
    Info,
    Navigate(&'static str),
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: String,
    pub action: MenuAction,
}

impl MenuEntry {
    fn route(key: &'static str, label: &str, path: &'static str) -> Self {
        Self {
            key,
            label: label.to_string(),
            action: MenuAction::Navigate(path),
        }
    }
}

/// Shortcuts every signed-in user gets, in display order
const SHORTCUTS: [(&str, &str, &str); 10] = [
    ("home", "Home", "/"),
    ("profile", "Profile", "/profile"),
    ("live_status", "Live Status", "/pslive"),
    ("location", "Location", "/location"),
    ("direction", "Direction", "/direction"),
    ("navigation", "Navigation", "/parking_navigation"),
    ("station", "Station", "/station"),
    ("booking", "Booking Slot", "/bookslot"),
    ("booked_slot", "Booked Slot", "/myorders"),
    ("contact_us", "Contact Us", "/contact_us"),
];

pub fn profile_menu(profile: &UserProfile) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry {
        key: "signed_in",
        label: format!("Signed in as {}", profile.email),
        action: MenuAction::Info,
    }];

    if profile.is_admin() {
        entries.push(MenuEntry::route("dashboard", "Dashboard", "/admin/dashboard"));
    }

    entries.extend(
        SHORTCUTS
            .iter()
            .map(|&(key, label, path)| MenuEntry::route(key, label, path)),
    );

    entries.push(MenuEntry {
        key: "logout",
        label: "Log Out".to_string(),
        action: MenuAction::Logout,
    });

    entries
}

pub fn find_action(entries: &[MenuEntry], key: &str) -> Option<MenuAction> {
    entries.iter().find(|e| e.key == key).map(|e| e.action.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile(role: &str) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Sam".into(),
            email: "sam@parkwiz.test".into(),
            avatar: None,
            role: role.into(),
        }
    }

    #[test]
    fn dashboard_only_for_admins() {
        let admin = profile_menu(&profile("admin"));
        let user = profile_menu(&profile("user"));

        assert_eq!(
            find_action(&admin, "dashboard"),
            Some(MenuAction::Navigate("/admin/dashboard"))
        );
        assert_eq!(find_action(&user, "dashboard"), None);
        assert_eq!(admin.len(), user.len() + 1);
    }

    #[test]
    fn starts_with_email_and_ends_with_logout() {
        let entries = profile_menu(&profile("user"));
        assert_eq!(entries[0].label, "Signed in as sam@parkwiz.test");
        assert_eq!(entries[0].action, MenuAction::Info);
        assert_eq!(entries.last().map(|e| &e.action), Some(&MenuAction::Logout));
    }

    #[test]
    fn shortcut_routes() {
        let entries = profile_menu(&profile("user"));
        let routes: Vec<_> = entries
            .iter()
            .filter_map(|e| match e.action {
                MenuAction::Navigate(path) => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(
            routes,
            vec![
                "/", "/profile", "/pslive", "/location", "/direction",
                "/parking_navigation", "/station", "/bookslot", "/myorders", "/contact_us",
            ]
        );
    }

    #[test]
    fn keys_are_unique() {
        let entries = profile_menu(&profile("admin"));
        let keys: HashSet<_> = entries.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), entries.len());
    }
}
