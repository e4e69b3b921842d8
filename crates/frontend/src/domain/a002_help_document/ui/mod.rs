pub mod center;
