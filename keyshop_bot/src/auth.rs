//! Authorization is deliberately minimal: one configured administrator identity, and a single predicate the
//! router consults before dispatching any admin-tagged handler. There is no role hierarchy and no multi-admin
//! support.
use teloxide::types::User;

/// Returns true when `user` is the configured administrator.
pub fn is_admin(admin_id: i64, user: Option<&User>) -> bool {
    user.is_some_and(|u| u.id.0 as i64 == admin_id)
}

#[cfg(test)]
mod test {
    use teloxide::types::UserId;

    use super::*;

    fn user(id: u64) -> User {
        User {
            id: UserId(id),
            is_bot: false,
            first_name: "Alice".to_string(),
            last_name: None,
            username: None,
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn only_the_configured_identity_is_admin() {
        let admin = user(99);
        let buyer = user(42);
        assert!(is_admin(99, Some(&admin)));
        assert!(!is_admin(99, Some(&buyer)));
        assert!(!is_admin(99, None));
    }

    #[test]
    fn an_unset_admin_id_matches_nobody() {
        assert!(!is_admin(0, Some(&user(42))));
    }
}
