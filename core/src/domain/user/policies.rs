use crate::domain::{authentication::value_objects::Identity, user::entities::UserRole};

/// Account administration (listing aside) is admin-only.
pub fn can_manage_users(identity: &Identity) -> bool {
    identity.role() == UserRole::Admin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::User;

    #[test]
    fn only_admins_manage_users() {
        let mut admin = User::fixture();
        admin.role = UserRole::Admin;
        assert!(can_manage_users(&Identity::User(admin)));

        let plain = User::fixture();
        assert!(!can_manage_users(&Identity::User(plain)));
    }
}
