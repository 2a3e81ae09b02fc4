pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;

#[cfg(test)]
mod tests;
