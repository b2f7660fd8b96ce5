// Infrastructure layer module
// Contains storage adapters
// Follows Hexagonal Architecture

pub mod repositories;
