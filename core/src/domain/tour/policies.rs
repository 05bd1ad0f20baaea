use crate::domain::{authentication::value_objects::Identity, user::entities::UserRole};

/// Tour deletion is reserved for staff roles.
pub fn can_delete_tour(identity: &Identity) -> bool {
    matches!(identity.role(), UserRole::Admin | UserRole::LeadGuide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::User;

    #[test]
    fn staff_roles_may_delete_tours() {
        for (role, allowed) in [
            (UserRole::Admin, true),
            (UserRole::LeadGuide, true),
            (UserRole::Guide, false),
            (UserRole::User, false),
        ] {
            let mut user = User::fixture();
            user.role = role;
            assert_eq!(can_delete_tour(&Identity::User(user)), allowed);
        }
    }
}
