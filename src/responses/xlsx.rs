// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return XLSX file as HTTP response
///
/// Exports reflect the query that produced them, so they are never cached.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header(
            "Content-Type",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .header("Content-Disposition", attachment_disposition(filename))
        .header("Cache-Control", "no-store")
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError) // Convert any builder error
}

/// Quotes, backslashes and control characters cannot appear inside the
/// quoted filename, so they are dropped.
fn attachment_disposition(filename: &str) -> String {
    let clean: String = filename
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && !c.is_control())
        .collect();
    let clean = if clean.trim().is_empty() {
        "export.xlsx"
    } else {
        clean.as_str()
    };
    format!("attachment; filename=\"{clean}\"")
}
