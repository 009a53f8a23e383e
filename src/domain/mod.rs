// Domain layer - Row models and the overview snapshot
pub mod overview;
pub mod workspace;
