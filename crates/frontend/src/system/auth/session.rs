//! Session states and the decisions the header takes on them

use contracts::system::auth::UserProfile;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

impl SessionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionStatus::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.profile().map(UserProfile::is_admin).unwrap_or(false)
    }
}

/// What to do once the session has settled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountDecision {
    Stay,
    /// A session cookie exists but no profile was loaded
    Reload,
    RedirectToLogin,
}

pub fn mount_decision(status: &SessionStatus, has_session_cookie: bool) -> MountDecision {
    match status {
        SessionStatus::Loading | SessionStatus::Authenticated(_) => MountDecision::Stay,
        SessionStatus::Anonymous if has_session_cookie => MountDecision::Reload,
        SessionStatus::Anonymous => MountDecision::RedirectToLogin,
    }
}

/// Issues at most one reload/redirect per settled anonymous state.
/// Re-arms once the session leaves the anonymous state.
#[derive(Clone, Debug, Default)]
pub struct MountGuard {
    issued: Option<MountDecision>,
}

impl MountGuard {
    pub fn observe(&mut self, status: &SessionStatus, has_session_cookie: bool) -> Option<MountDecision> {
        match mount_decision(status, has_session_cookie) {
            MountDecision::Stay => {
                self.issued = None;
                None
            }
            decision if self.issued.is_some() => {
                log::debug!("Navigation {:?} already issued", decision);
                None
            }
            decision => {
                self.issued = Some(decision);
                Some(decision)
            }
        }
    }

    pub fn is_navigating(&self) -> bool {
        self.issued.is_some()
    }
}

/// What the account slot of the header shows
#[derive(Clone, Debug, PartialEq)]
pub enum AccountSlot {
    Skeleton,
    Menu(UserProfile),
    SignIn,
    /// A reload or redirect is in flight
    Empty,
}

pub fn account_slot(status: &SessionStatus, navigating: bool) -> AccountSlot {
    match status {
        SessionStatus::Loading => AccountSlot::Skeleton,
        SessionStatus::Authenticated(profile) => AccountSlot::Menu(profile.clone()),
        SessionStatus::Anonymous if navigating => AccountSlot::Empty,
        SessionStatus::Anonymous => AccountSlot::SignIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: &str) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Jane".into(),
            email: "jane@parkwiz.test".into(),
            avatar: None,
            role: role.into(),
        }
    }

    #[test]
    fn loading_and_authenticated_stay() {
        assert_eq!(mount_decision(&SessionStatus::Loading, false), MountDecision::Stay);
        assert_eq!(
            mount_decision(&SessionStatus::Authenticated(profile("user")), false),
            MountDecision::Stay
        );
    }

    #[test]
    fn anonymous_with_cookie_reloads() {
        assert_eq!(mount_decision(&SessionStatus::Anonymous, true), MountDecision::Reload);
    }

    #[test]
    fn anonymous_without_cookie_redirects_exactly_once() {
        let mut guard = MountGuard::default();
        let status = SessionStatus::Anonymous;

        let issued: Vec<_> = (0..3).filter_map(|_| guard.observe(&status, false)).collect();

        assert_eq!(issued, vec![MountDecision::RedirectToLogin]);
        assert!(guard.is_navigating());
        assert_eq!(account_slot(&status, guard.is_navigating()), AccountSlot::Empty);
    }

    #[test]
    fn guard_rearms_after_session_loads() {
        let mut guard = MountGuard::default();
        assert!(guard.observe(&SessionStatus::Anonymous, true).is_some());
        assert!(guard.observe(&SessionStatus::Loading, true).is_none());
        assert!(!guard.is_navigating());
        assert_eq!(
            guard.observe(&SessionStatus::Anonymous, false),
            Some(MountDecision::RedirectToLogin)
        );
    }

    #[test]
    fn account_slot_follows_status() {
        assert_eq!(account_slot(&SessionStatus::Loading, false), AccountSlot::Skeleton);
        assert_eq!(account_slot(&SessionStatus::Anonymous, false), AccountSlot::SignIn);
        assert_eq!(
            account_slot(&SessionStatus::Authenticated(profile("admin")), false),
            AccountSlot::Menu(profile("admin"))
        );
    }

    #[test]
    fn admin_flag_comes_from_profile_role() {
        assert!(SessionStatus::Authenticated(profile("admin")).is_admin());
        assert!(!SessionStatus::Authenticated(profile("user")).is_admin());
        assert!(!SessionStatus::Anonymous.is_admin());
    }
}
