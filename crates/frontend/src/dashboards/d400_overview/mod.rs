pub mod snapshot;
pub mod ui;
