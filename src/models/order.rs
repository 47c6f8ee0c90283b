/// Everything collected from the user for one order run.
#[derive(Debug, Clone)]
pub struct OrderInput {
    /// Name of the person receiving the order; may be empty.
    pub recipient: String,

    /// Phone number of the recipient; may be empty (warned, not blocking).
    pub phone: String,

    /// Number of workshop participants (>= 1).
    pub participants: u32,

    /// Number of staff members (>= 0).
    pub staff: u32,

    /// Weeks since the beginning of the semester (>= 0).
    pub weeks: u32,

    /// Final pizza count, after clamping and any manual adjustment (>= 1).
    pub total_pizzas: u32,
}

impl OrderInput {
    /// Recipient name as it appears in the order text ("I" when empty).
    pub fn recipient_or_self(&self) -> &str {
        if self.recipient.is_empty() {
            "I"
        } else {
            &self.recipient
        }
    }
}

/// Per-variety pizza quantities, in allocation order.
///
/// Order matters: the allocator consumes a shrinking pool, so the entries
/// are kept as an ordered list rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaDistribution {
    pub entries: Vec<(String, u32)>,
}

impl PizzaDistribution {
    pub fn new(entries: Vec<(String, u32)>) -> Self {
        Self { entries }
    }

    /// Sum of all variety quantities.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, qty)| qty).sum()
    }

    /// Quantity for a named variety, if present.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(n, qty)| (n.as_str(), *qty))
    }
}
