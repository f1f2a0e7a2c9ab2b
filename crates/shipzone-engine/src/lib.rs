pub mod batch;
pub mod calculator;
pub mod currency;
pub mod error;
pub mod geo;
pub mod rates;
pub mod warehouse_index;
pub mod zone;

pub use batch::{run_batch, RunSummary};
pub use calculator::ShippingCalculator;
pub use currency::format_rupiah;
pub use error::EngineError;
pub use rates::{normalize_price, RateEntry, RateTable};
pub use warehouse_index::{Nearest, WarehouseIndex};
pub use zone::{ZoneClassifier, ZoneTiers};
