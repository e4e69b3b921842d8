pub mod domain;
pub mod enums;
pub mod fixtures;
pub mod shared;
