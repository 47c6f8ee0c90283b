use crate::order::constants::{
    PIZZA_DIVISION_FACTOR, PIZZA_PER_PARTICIPANT, PIZZA_PER_STAFF, PIZZA_REDUCTION_PER_WEEK,
};

/// Calculate the total number of pizzas needed.
///
/// Formula: trunc((participants * 0.8 + staff * 1.0 - weeks * 0.4) / 3.5),
/// truncating toward zero. May be zero or negative for small head counts;
/// the order flow clamps that to 1 with a warning.
pub fn calculate_total_pizzas(participants: u32, staff: u32, weeks: u32) -> i64 {
    let weighted = f64::from(participants) * PIZZA_PER_PARTICIPANT
        + f64::from(staff) * PIZZA_PER_STAFF
        - f64::from(weeks) * PIZZA_REDUCTION_PER_WEEK;

    (weighted / PIZZA_DIVISION_FACTOR) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        // (50*0.8 + 5 - 2*0.4) / 3.5 = 44.2 / 3.5 = 12.628... -> 12
        assert_eq!(calculate_total_pizzas(50, 5, 2), 12);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // (10*0.8 + 0 - 0) / 3.5 = 2.285... -> 2
        assert_eq!(calculate_total_pizzas(10, 0, 0), 2);
        // (16*0.8 + 1 - 0) / 3.5 = 3.94... -> 3, not 4
        assert_eq!(calculate_total_pizzas(16, 1, 0), 3);
    }

    #[test]
    fn test_can_go_nonpositive() {
        // (1*0.8 + 0 - 0) / 3.5 = 0.228... -> 0
        assert_eq!(calculate_total_pizzas(1, 0, 0), 0);
        // (1*0.8 + 0 - 10*0.4) / 3.5 = -3.2 / 3.5 = -0.914... -> 0 (toward zero)
        assert_eq!(calculate_total_pizzas(1, 0, 10), 0);
        // (2*0.8 + 0 - 20*0.4) / 3.5 = -6.4 / 3.5 = -1.82... -> -1
        assert_eq!(calculate_total_pizzas(2, 0, 20), -1);
    }

    #[test]
    fn test_staff_counts_fully() {
        // Staff weigh 1.0 each: 7 staff alone -> 7 / 3.5 = 2
        assert_eq!(calculate_total_pizzas(0, 7, 0), 2);
    }
}
