use crate::models::{OrderInput, PizzaDistribution};
use crate::order::constants::{
    BILLING_ADDRESS, BILLING_EMAIL, BILLING_NAME, DELIVERY_LOCATION, PIZZA_SIZE,
};

/// Format one itemized line, or an empty string for zero quantities.
///
/// Zero-quantity varieties contribute nothing to the order text.
pub fn format_pizza_item(name: &str, quantity: u32) -> String {
    if quantity == 0 {
        return String::new();
    }
    format!(" - {} x{}\n", name, quantity)
}

/// Render the full order email text.
///
/// Fixed layout; the same input always renders to byte-identical text.
pub fn render_order(input: &OrderInput, distribution: &PizzaDistribution) -> String {
    let person_message = format!("{} will receive the order.", input.recipient_or_self());
    let phone_message = format!("{}'s phone number: {}", input.recipient, input.phone);

    let mut pizza_details = String::new();
    for (name, quantity) in distribution.iter() {
        pizza_details.push_str(&format_pizza_item(name, quantity));
    }

    format!(
        "Hello Dieci Team!\n\
         \n\
         Thank you for the order last week!\n\
         \n\
         Below is another order we will need today around 19h30.\n\
         \n\
         We would like to pay by invoice.\n\
         Billing address:\n\
         - name: {billing_name}\n\
         - address: {billing_address}\n\
         - email: {billing_email}\n\
         \n\
         {person_message}\n\
         \n\
         Delivery details:\n\
         - Location: {delivery_location}\n\
         - {phone_message}\n\
         \n\
         {total} pizzas (all {size}):\n\
         {pizza_details}\n\
         Best regards,\n\
         \n\
         LauzHack committee.",
        billing_name = BILLING_NAME,
        billing_address = BILLING_ADDRESS,
        billing_email = BILLING_EMAIL,
        person_message = person_message,
        delivery_location = DELIVERY_LOCATION,
        phone_message = phone_message,
        total = input.total_pizzas,
        size = PIZZA_SIZE,
        pizza_details = pizza_details,
    )
}

/// Print the rendered order framed by preview banners.
pub fn display_preview(order_text: &str) {
    println!();
    println!("=== Order Preview ===");
    println!("{}", order_text);
    println!("=====================");
    println!();
}

/// Print a distribution as a plain list with its sum.
pub fn display_distribution(distribution: &PizzaDistribution) {
    for (name, quantity) in distribution.iter() {
        if quantity > 0 {
            print!("{}", format_pizza_item(name, quantity));
        }
    }
    println!("Total: {} pizzas", distribution.total());
}
