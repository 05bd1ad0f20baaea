pub mod create_tour;
pub mod delete_tour;
pub mod get_top_cheap_tours;
pub mod get_tour;
pub mod get_tour_stats;
pub mod get_tours;
pub mod update_tour;
