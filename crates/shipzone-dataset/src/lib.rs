pub mod error;
pub mod orders;
pub mod output;
pub mod table;

pub use error::DatasetError;
pub use orders::{parse_orders, OrderTable, REQUIRED_ORDER_COLUMNS};
pub use output::{create_output_file, timestamped_path, write_annotated, OUTPUT_COLUMNS};
pub use table::{read_table, RawTable};
