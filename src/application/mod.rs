// Application layer - Use cases and repository contracts
pub mod overview_service;
pub mod workspace_repository;
