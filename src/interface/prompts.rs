use dialoguer::Input;

use crate::error::{PizzaError, Result};

/// Prompt for a free-text value. Empty input returns `default` verbatim.
pub fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    if input.is_empty() {
        return Ok(default.to_string());
    }

    Ok(input)
}

/// Parse a count with a minimum bound.
///
/// Separated from the prompt loop so the validation is testable without a
/// terminal.
pub fn parse_count(input: &str, min_value: u32) -> Result<u32> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| PizzaError::InvalidInput("Invalid input".to_string()))?;

    if value < i64::from(min_value) {
        return Err(PizzaError::InvalidInput(format!(
            "Value must be at least {}",
            min_value
        )));
    }

    u32::try_from(value).map_err(|_| PizzaError::InvalidInput("Invalid input".to_string()))
}

/// Prompt for a count with a minimum bound, retrying until valid.
///
/// Empty input returns `default` when one is supplied; otherwise it is
/// treated like any other unparsable answer. There is no upper bound and
/// the loop never gives up.
pub fn prompt_count(prompt: &str, default: Option<u32>, min_value: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        if input.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
        }

        match parse_count(&input, min_value) {
            Ok(value) => return Ok(value),
            Err(PizzaError::InvalidInput(msg)) => {
                println!("{}. Please try again.", msg);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for save confirmation. Only "y"/"yes" (case-insensitive) accept;
/// any other answer declines.
pub fn prompt_save(prompt: &str) -> Result<bool> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
