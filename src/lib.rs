pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod order;
pub mod storage;

pub use error::{PizzaError, Result};
pub use models::{OrderInput, PizzaDistribution};
