use shipzone_core::OrderRow;

use crate::error::DatasetError;
use crate::table::RawTable;

pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const WEIGHT_COLUMN: &str = "Weight";
pub const COURIER_COLUMN: &str = "Courier";
pub const SERVICE_COLUMN: &str = "Service";

pub const REQUIRED_ORDER_COLUMNS: [&str; 5] = [
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    WEIGHT_COLUMN,
    COURIER_COLUMN,
    SERVICE_COLUMN,
];

/// The raw order table together with its typed rows, index-aligned.
#[derive(Debug, Clone)]
pub struct OrderTable {
    pub raw: RawTable,
    pub rows: Vec<OrderRow>,
}

/// Extract typed order rows, coercing numeric cells.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumn`] if any required column is absent.
pub fn parse_orders(raw: RawTable) -> Result<OrderTable, DatasetError> {
    let mut idx = [0usize; 5];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_ORDER_COLUMNS) {
        *slot = raw
            .column_index(name)
            .ok_or_else(|| DatasetError::MissingColumn {
                table: "order".to_string(),
                column: name.to_string(),
            })?;
    }
    let [lat, lon, weight, courier, service] = idx;

    let rows = raw
        .records
        .iter()
        .map(|r| {
            let cell = |i: usize| r.get(i).map_or("", String::as_str);
            OrderRow::from_cells(cell(lat), cell(lon), cell(weight), cell(courier), cell(service))
        })
        .collect();

    Ok(OrderTable { raw, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], records: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            records: records
                .iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn parses_rows_in_any_column_order() {
        let raw = table(
            &["Order_ID", "Courier", "Service", "Weight", "Longitude", "Latitude"],
            &[&["A1", "JNE", "REG", "2.5", "106.8456", "-6.2088"]],
        );
        let orders = parse_orders(raw).unwrap();
        let row = &orders.rows[0];
        assert_eq!(row.latitude, Some(-6.2088));
        assert_eq!(row.longitude, Some(106.8456));
        assert_eq!(row.weight, Some(2.5));
        assert_eq!(row.courier, "JNE");
        assert_eq!(row.service, "REG");
        assert_eq!(orders.raw.records[0][0], "A1");
    }

    #[test]
    fn malformed_numbers_become_none() {
        let raw = table(
            &["Latitude", "Longitude", "Weight", "Courier", "Service"],
            &[&["north", "", "two", "JNE", "REG"]],
        );
        let row = &parse_orders(raw).unwrap().rows[0];
        assert_eq!(row.latitude, None);
        assert_eq!(row.longitude, None);
        assert_eq!(row.weight, None);
    }

    #[test]
    fn missing_weight_column_is_rejected() {
        let raw = table(&["Latitude", "Longitude", "Courier", "Service"], &[]);
        let err = parse_orders(raw).unwrap_err();
        assert!(
            matches!(err, DatasetError::MissingColumn { ref column, .. } if column == "Weight"),
            "got {err:?}"
        );
    }

    #[test]
    fn rows_align_with_records() {
        let raw = table(
            &["Latitude", "Longitude", "Weight", "Courier", "Service"],
            &[&["1", "1", "1", "A", "x"], &["2", "2", "2", "B", "y"]],
        );
        let orders = parse_orders(raw).unwrap();
        assert_eq!(orders.rows.len(), orders.raw.records.len());
        assert_eq!(orders.rows[1].courier, "B");
    }
}
