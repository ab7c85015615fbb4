use rust_xlsxwriter::Worksheet;
use serde::{Deserialize, Serialize};

use crate::error::PrimerError;

/// One line of demo sales data.
///
/// `total` is derived from price and quantity, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub discount: Option<f64>,
}

impl Sale {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl std::fmt::Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} * {}", self.name, self.quantity, self.unit_price)
    }
}

/// Deterministic stand-in for a real data source. Ids are assigned
/// sequentially per generator, starting at 1.
#[derive(Debug, Default)]
pub struct SalesGenerator {
    next_id: u32,
}

const CATALOG: &[(&str, f64, u32, Option<f64>)] = &[
    ("Nails", 3.99, 37, None),
    ("Hammer", 12.10, 5, Some(0.1)),
    ("Saw", 15.37, 12, None),
    ("Drill", 89.90, 2, Some(0.05)),
    ("Tape measure", 7.25, 14, None),
];

impl SalesGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up to `amount` rows from the catalog.
    pub fn take(&mut self, amount: usize) -> Vec<Sale> {
        CATALOG
            .iter()
            .take(amount)
            .map(|&(name, unit_price, quantity, discount)| {
                self.next_id += 1;
                Sale {
                    id: self.next_id,
                    name: name.to_string(),
                    quantity,
                    unit_price,
                    discount,
                }
            })
            .collect()
    }
}

/// Read sales rows from CSV text with a header line
/// (`id,name,quantity,unit_price,discount`; an empty discount field maps to
/// `None`).
pub fn sales_from_csv<R: std::io::Read>(reader: R) -> Result<Vec<Sale>, PrimerError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sales = Vec::new();
    for record in csv_reader.deserialize() {
        sales.push(record?);
    }
    tracing::debug!(rows = sales.len(), "imported sales from csv");
    Ok(sales)
}

/// Write one worksheet row per sale starting at `first_row` (0-based).
///
/// Column layout matches the record projection used throughout the tours:
/// id, name, quantity, unit price, base total (derived), discount.
pub fn write_sales(
    sheet: &mut Worksheet,
    first_row: u32,
    sales: &[Sale],
) -> Result<(), PrimerError> {
    for (i, sale) in sales.iter().enumerate() {
        let row = first_row + i as u32;
        sheet.write_number(row, 0, f64::from(sale.id))?;
        sheet.write_string(row, 1, sale.name.as_str())?;
        sheet.write_number(row, 2, f64::from(sale.quantity))?;
        sheet.write_number(row, 3, sale.unit_price)?;
        sheet.write_number(row, 4, sale.total())?;
        if let Some(discount) = sale.discount {
            sheet.write_number(row, 5, discount)?;
        }
    }
    Ok(())
}
