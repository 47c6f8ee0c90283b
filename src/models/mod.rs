pub mod order;

pub use order::{OrderInput, PizzaDistribution};
