use clap::{Parser, Subcommand};

/// PizzaOrderMaker — generates the weekly workshop pizza order.
#[derive(Parser, Debug)]
#[command(name = "pizza_order_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path the rendered order is saved to.
    #[arg(short, long, default_value = "order.txt")]
    pub output: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect order details interactively and generate the order text.
    Order,

    /// Print the pizza distribution for a given total without prompting.
    Distribution {
        /// Total number of pizzas to distribute.
        #[arg(long)]
        total: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}
