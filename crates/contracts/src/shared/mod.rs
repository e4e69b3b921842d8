pub mod polling;
pub mod search;
pub mod summary;
pub mod tips;
