use crate::models::PizzaDistribution;
use crate::order::constants::{PIZZA_RATIOS, REMAINDER_VARIETY};

/// Calculate the distribution of pizza varieties for a total count.
///
/// Walks the ratio table in order against a shrinking pool: each variety
/// takes trunc(remaining * ratio) from what the varieties before it left,
/// not a share of the original total. Verde and Kickiricki are floored at 1,
/// which can push `remaining` negative for tiny totals; that is left
/// unguarded and the remainder variety simply gets 0.
pub fn calculate_distribution(total_pizzas: u32) -> PizzaDistribution {
    let mut remaining = i64::from(total_pizzas);
    let mut entries = Vec::with_capacity(PIZZA_RATIOS.len() + 1);

    for entry in PIZZA_RATIOS {
        let raw = (remaining as f64 * entry.ratio) as i64;
        let quantity = raw.max(i64::from(entry.min_quantity));

        entries.push((entry.name.to_string(), quantity as u32));
        remaining -= quantity;
    }

    entries.push((REMAINDER_VARIETY.to_string(), remaining.max(0) as u32));

    PizzaDistribution::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrinking_pool_trace_for_twenty() {
        let dist = calculate_distribution(20);

        // Each step consumes from what the previous steps left:
        // 20 -> Gamberetti 2, 18 -> Funghi 4, 14 -> Verde 3, 11 -> Kickiricki 2,
        // 9 -> Prosciutto 3, 6 -> Salame 2, remainder 4.
        assert_eq!(dist.get("Gamberetti"), Some(2));
        assert_eq!(dist.get("Funghi"), Some(4));
        assert_eq!(dist.get("Verde"), Some(3));
        assert_eq!(dist.get("Kickiricki"), Some(2));
        assert_eq!(dist.get("Prosciutto"), Some(3));
        assert_eq!(dist.get("Salame"), Some(2));
        assert_eq!(dist.get("Fior di Margherita"), Some(4));
        assert_eq!(dist.total(), 20);
    }

    #[test]
    fn test_allocation_order_is_fixed() {
        let dist = calculate_distribution(20);
        let names: Vec<&str> = dist.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "Gamberetti",
                "Funghi",
                "Verde",
                "Kickiricki",
                "Prosciutto",
                "Salame",
                "Fior di Margherita",
            ]
        );
    }

    #[test]
    fn test_forced_minimums() {
        // Even with nothing to allocate, Verde and Kickiricki get one each.
        let dist = calculate_distribution(0);
        assert_eq!(dist.get("Verde"), Some(1));
        assert_eq!(dist.get("Kickiricki"), Some(1));
        assert_eq!(dist.get("Fior di Margherita"), Some(0));
    }

    #[test]
    fn test_tiny_totals_oversupply() {
        // The forced minimums overdraw the pool at T=1: sum is 2, not 1.
        let dist = calculate_distribution(1);
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn test_sum_matches_total() {
        // From T=2 up the forced minimums fit in the pool and the remainder
        // variety absorbs the rest exactly.
        for total in 2..=200 {
            let dist = calculate_distribution(total);
            assert_eq!(dist.total(), total, "sum mismatch for total {}", total);
        }
    }
}
