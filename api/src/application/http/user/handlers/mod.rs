pub mod delete_me;
pub mod delete_user;
pub mod get_user;
pub mod get_users;
pub mod update_me;
pub mod update_user;
