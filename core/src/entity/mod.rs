pub mod tours;
pub mod users;
