use std::path::Path;

use formualizer_common::LiteralValue;
use formualizer_workbook::Workbook;

use crate::addr::parse_a1;
use crate::error::PrimerError;
use crate::style::write_headers;

/// A scratchpad for trying formulas against the engine.
///
/// Each [`check`](Self::check) writes the formula text as a label in column
/// A of the cursor row, installs the live formula in column B, evaluates it,
/// asserts the result, then moves down one row. The exported artifact reads
/// as a two-column formula/value reference sheet, so every reference test
/// leaves an inspectable workbook behind.
pub struct FormulaProbe {
    workbook: Workbook,
    sheet: String,
    cursor: u32,
    rows: Vec<(String, LiteralValue)>,
}

impl FormulaProbe {
    pub fn new(sheet: &str) -> Result<Self, PrimerError> {
        let mut workbook = Workbook::new();
        workbook.add_sheet(sheet)?;
        Ok(Self {
            workbook,
            sheet: sheet.to_string(),
            cursor: 2,
            rows: Vec::new(),
        })
    }

    /// Seed a plain value at an A1 address.
    pub fn set(&mut self, addr: &str, value: LiteralValue) -> Result<(), PrimerError> {
        let (row, col) = parse_a1(addr)?;
        self.workbook.set_value(&self.sheet, row, col, value)?;
        Ok(())
    }

    /// Seed a formula at an A1 address without asserting anything.
    pub fn set_formula(&mut self, addr: &str, formula: &str) -> Result<(), PrimerError> {
        let (row, col) = parse_a1(addr)?;
        self.workbook.set_formula(&self.sheet, row, col, formula)?;
        Ok(())
    }

    /// Evaluate the cell at `addr` and assert it matches `expected`.
    pub fn assert_cell(
        &mut self,
        addr: &str,
        expected: &LiteralValue,
    ) -> Result<(), PrimerError> {
        let (row, col) = parse_a1(addr)?;
        let actual = self.workbook.evaluate_cell(&self.sheet, row, col)?;
        assert_value(addr, &actual, expected);
        Ok(())
    }

    /// Install `formula` on the cursor row, evaluate it, assert the result,
    /// and advance the cursor.
    pub fn check(&mut self, formula: &str, expected: LiteralValue) -> Result<(), PrimerError> {
        let row = self.cursor;
        self.cursor += 1;

        self.workbook
            .set_value(&self.sheet, row, 1, LiteralValue::Text(format!("={formula}")))?;
        self.workbook.set_formula(&self.sheet, row, 2, formula)?;
        let actual = self.workbook.evaluate_cell(&self.sheet, row, 2)?;
        tracing::trace!(formula, ?actual, "probe evaluated");
        assert_value(formula, &actual, &expected);
        self.rows.push((formula.to_string(), actual));
        Ok(())
    }

    /// The engine-backed workbook, for anything the helpers don't cover.
    pub fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    /// Dump the scratchpad to an xlsx file.
    pub fn export(&self, path: &Path) -> Result<(), PrimerError> {
        let mut book = rust_xlsxwriter::Workbook::new();
        let sheet = book.add_worksheet();
        sheet.set_name(self.sheet.as_str())?;
        write_headers(sheet, 0, 0, &["Formula", "Value"])?;
        for (i, (formula, value)) in self.rows.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, format!("={formula}"))?;
            match value {
                LiteralValue::Int(n) => {
                    sheet.write_number(row, 1, *n as f64)?;
                }
                LiteralValue::Number(n) => {
                    sheet.write_number(row, 1, *n)?;
                }
                LiteralValue::Boolean(b) => {
                    sheet.write_boolean(row, 1, *b)?;
                }
                LiteralValue::Text(s) => {
                    sheet.write_string(row, 1, s.as_str())?;
                }
                other => {
                    sheet.write_string(row, 1, format!("{other:?}"))?;
                }
            }
        }
        sheet.set_column_width(0, 45)?;
        book.save(path)?;
        Ok(())
    }
}

/// Value comparison with spreadsheet looseness: `Int` and `Number` compare
/// numerically with a small tolerance, everything else must match exactly.
pub fn assert_value(context: &str, actual: &LiteralValue, expected: &LiteralValue) {
    match (as_number(actual), as_number(expected)) {
        (Some(a), Some(e)) => assert!(
            (a - e).abs() < 1e-9,
            "{context}: expected {expected:?}, got {actual:?}"
        ),
        _ => assert_eq!(actual, expected, "{context}"),
    }
}

fn as_number(value: &LiteralValue) -> Option<f64> {
    match value {
        LiteralValue::Int(i) => Some(*i as f64),
        LiteralValue::Number(n) => Some(*n),
        _ => None,
    }
}
