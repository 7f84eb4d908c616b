use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::filters::FilterState;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::view::COLUMNS;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Spreadsheet bytes for an already filtered and sorted view: same columns as
/// the HTML table, raw numbers instead of display strings.
pub fn listings_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let bold = Format::new().set_bold();
    let percent = Format::new().set_num_format("0.0%");
    let thousands = Format::new().set_num_format("#,##0");

    // Headers
    for (col, column) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, column.label, &bold)
            .map_err(xlsx_err("header"))?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        let yes_blank = |flag: bool| if flag { "Yes" } else { "" };

        worksheet
            .write_number_with_format(r, 0, listing.roi, &percent)
            .map_err(xlsx_err("ROI"))?;
        worksheet
            .write_number_with_format(r, 1, listing.price, &thousands)
            .map_err(xlsx_err("price"))?;
        worksheet
            .write_number(r, 2, listing.size)
            .map_err(xlsx_err("size"))?;
        worksheet
            .write_number(r, 3, listing.rooms as f64)
            .map_err(xlsx_err("rooms"))?;
        worksheet
            .write_number(r, 4, listing.bathrooms as f64)
            .map_err(xlsx_err("bathrooms"))?;
        worksheet
            .write_string(r, 5, yes_blank(listing.near_restaurants))
            .map_err(xlsx_err("restaurants"))?;
        worksheet
            .write_string(r, 6, yes_blank(listing.near_shops))
            .map_err(xlsx_err("shops"))?;
        worksheet
            .write_number(r, 7, listing.average_rent)
            .map_err(xlsx_err("rent"))?;
        worksheet
            .write_number(r, 8, listing.airport_distance)
            .map_err(xlsx_err("airport distance"))?;
        worksheet
            .write_string(r, 9, &listing.municipality)
            .map_err(xlsx_err("municipality"))?;
        worksheet
            .write_string(r, 10, &listing.url)
            .map_err(xlsx_err("link"))?;
        worksheet
            .write_string(r, 11, listing.property_code.to_string())
            .map_err(xlsx_err("code"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

/// `listings_<town>.xlsx` when the export is narrowed to a single
/// municipality, `listings.xlsx` otherwise.
pub fn export_filename(state: &FilterState) -> String {
    let mut towns = state.municipalities.iter();
    match (towns.next(), towns.next()) {
        (Some(town), None) => {
            let slug = slugify(town);
            if slug.is_empty() {
                "listings.xlsx".to_string()
            } else {
                format!("listings_{slug}.xlsx")
            }
        }
        _ => "listings.xlsx".to_string(),
    }
}

// Lowercase ASCII alphanumerics, every other run collapsed to one dash.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

pub fn export_listings_xlsx(listings: &[&Listing], filename: &str) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, filename)
}
