pub mod application;
pub mod traits;
