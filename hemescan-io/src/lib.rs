pub mod error;
pub mod io;
pub mod services;

pub use error::InputError;
