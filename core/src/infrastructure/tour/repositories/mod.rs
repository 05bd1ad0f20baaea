pub mod tour_repository;
