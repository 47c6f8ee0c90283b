/// Pizzas per workshop participant.
pub const PIZZA_PER_PARTICIPANT: f64 = 0.8;

/// Pizzas per staff member.
pub const PIZZA_PER_STAFF: f64 = 1.0;

/// Reduction per week since the start of the semester (attendance drops).
pub const PIZZA_REDUCTION_PER_WEEK: f64 = 0.4;

/// Divisor applied to the weighted head count.
pub const PIZZA_DIVISION_FACTOR: f64 = 3.5;

/// One row of the allocation table.
#[derive(Debug, Clone, Copy)]
pub struct RatioEntry {
    pub name: &'static str,
    pub ratio: f64,
    /// Quantity floor applied after the ratio (0 = no floor).
    pub min_quantity: u32,
}

/// Ratio-based varieties, in allocation order.
///
/// The allocator walks this table consuming a shrinking pool, so the row
/// order directly determines the quantities. Do not reorder.
pub const PIZZA_RATIOS: [RatioEntry; 6] = [
    RatioEntry {
        name: "Gamberetti",
        ratio: 1.0 / 7.0,
        min_quantity: 0,
    },
    RatioEntry {
        name: "Funghi",
        ratio: 1.0 / 4.0,
        min_quantity: 0,
    },
    RatioEntry {
        name: "Verde",
        ratio: 1.0 / 4.0,
        min_quantity: 1,
    },
    RatioEntry {
        name: "Kickiricki",
        ratio: 1.0 / 4.0,
        min_quantity: 1,
    },
    RatioEntry {
        name: "Prosciutto",
        ratio: 1.0 / 3.0,
        min_quantity: 0,
    },
    RatioEntry {
        name: "Salame",
        ratio: 1.0 / 3.0,
        min_quantity: 0,
    },
];

/// Variety that absorbs whatever the ratio table leaves over.
pub const REMAINDER_VARIETY: &str = "Fior di Margherita";

// ─────────────────────────────────────────────────────────────────────────────
// Fixed order information
// ─────────────────────────────────────────────────────────────────────────────

pub const BILLING_NAME: &str = "LauzHack";
pub const BILLING_ADDRESS: &str = "LauzHack, Station 14, 1015 Lausanne";
pub const BILLING_EMAIL: &str = "lauzhack@epfl.ch";

pub const DELIVERY_LOCATION: &str =
    "Batiment BC, Chem Alan Turing, 1015 Ecublens https://maps.app.goo.gl/NvtF2EbUwyFMev4P6";

pub const PIZZA_SIZE: &str = "large 40cm, sliced";

/// Default file the rendered order is written to.
pub const ORDER_FILE: &str = "order.txt";
