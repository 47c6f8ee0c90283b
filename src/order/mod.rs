pub mod calculations;
pub mod constants;
pub mod distribution;

pub use calculations::calculate_total_pizzas;
pub use constants::*;
pub use distribution::calculate_distribution;
