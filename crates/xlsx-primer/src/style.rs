use rust_xlsxwriter::{Color, Format, Worksheet};

use crate::error::PrimerError;

/// The house header look: bold white text on a dark blue fill.
pub fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x00008B))
}

/// Write consecutive styled header cells on `row` starting at `first_col`.
/// Returns the first column after the headers.
pub fn write_headers(
    sheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    titles: &[&str],
) -> Result<u16, PrimerError> {
    let format = header_format();
    for (i, title) in titles.iter().enumerate() {
        sheet.write_string_with_format(row, first_col + i as u16, *title, &format)?;
    }
    Ok(first_col + titles.len() as u16)
}
