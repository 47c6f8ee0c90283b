use clap::Parser;

use pizza_order_maker_rs::cli::{Cli, Command};
use pizza_order_maker_rs::error::Result;
use pizza_order_maker_rs::interface::{
    display_distribution, display_preview, prompt_count, prompt_save, prompt_text, render_order,
};
use pizza_order_maker_rs::models::OrderInput;
use pizza_order_maker_rs::order::{calculate_distribution, calculate_total_pizzas};
use pizza_order_maker_rs::storage::save_order;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Order => cmd_order(&cli.output),
        Command::Distribution { total } => cmd_distribution(total),
    }
}

/// Collect order details interactively, render the order, and offer to save it.
fn cmd_order(output_path: &str) -> Result<()> {
    println!("=== Workshop Pizza Order Generator ===");
    println!();

    let recipient = prompt_text("Who will receive the order?", "")?;

    let phone = prompt_text("What is the phone number of the person receiving the order?", "")?;
    if phone.is_empty() {
        println!("Warning: No phone number provided. This might cause delivery issues.");
    }

    let participants = prompt_count("Enter the number of participants", None, 1)?;
    let staff = prompt_count("Enter the number of staff members", None, 0)?;
    let weeks = prompt_count(
        "Enter the number of weeks since the beginning of the semester",
        None,
        0,
    )?;

    // The formula can land at or below zero for small events late in the
    // semester; order at least one pizza in that case.
    let computed = calculate_total_pizzas(participants, staff, weeks);
    let total_pizzas = if computed <= 0 {
        println!("Warning: The calculation resulted in 0 or negative pizzas. Setting to 1.");
        1
    } else {
        computed as u32
    };

    println!();
    println!("Calculated total: {} pizzas", total_pizzas);

    let total_pizzas = prompt_count(
        &format!(
            "Adjust total pizza count? (Press Enter to keep {} or enter new number)",
            total_pizzas
        ),
        Some(total_pizzas),
        1,
    )?;

    let distribution = calculate_distribution(total_pizzas);

    let input = OrderInput {
        recipient,
        phone,
        participants,
        staff,
        weeks,
        total_pizzas,
    };

    let order_text = render_order(&input, &distribution);
    display_preview(&order_text);

    // A write failure is reported but never escalated; the run still ends
    // normally either way.
    if prompt_save(&format!("Save this order to {}? (y/n)", output_path))? {
        match save_order(output_path, &order_text) {
            Ok(()) => println!("Successfully wrote to {}.", output_path),
            Err(e) => println!("Error writing to file: {}", e),
        }
    } else {
        println!("Order was not saved.");
    }

    Ok(())
}

/// Print the variety split for a given total without any prompting.
fn cmd_distribution(total: u32) -> Result<()> {
    let distribution = calculate_distribution(total);
    display_distribution(&distribution);
    Ok(())
}
