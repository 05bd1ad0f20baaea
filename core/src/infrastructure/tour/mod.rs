pub mod mappers;
pub mod repositories;

pub use repositories::tour_repository::PostgresTourRepository;
