// src/view/format.rs

use maud::{html, Markup};
use url::Url;

/// Integer euros with thousands separated by a space: `1 250 000`.
/// The fractional part is truncated.
pub fn format_price(price: f64) -> String {
    group_thousands(price.trunc() as i64)
}

/// Truncated, like an integer cast.
pub fn format_size(size: f64) -> String {
    (size.trunc() as i64).to_string()
}

/// Truncated, like an integer cast.
pub fn format_rent(rent: f64) -> String {
    (rent.trunc() as i64).to_string()
}

/// Rounded half-to-even, not truncated.
pub fn format_airport_km(distance: f64) -> String {
    (distance.round_ties_even() as i64).to_string()
}

/// Fraction to percent with one decimal: `0.0821` -> `8.2 %`.
pub fn format_roi(roi: f64) -> String {
    format!("{:.1} %", roi * 100.0)
}

/// Anchor opening the listing in a new tab. The URL is attribute-escaped;
/// anything that is not an absolute http(s) URL renders as an empty cell.
pub fn listing_link(url: &str) -> Markup {
    let linkable = Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false);

    html! {
        @if linkable {
            a href=(url) target="_blank" rel="noopener noreferrer" { "View" }
        }
    }
}

/// Green check for a present amenity, nothing otherwise.
pub fn amenity_marker(present: bool) -> Markup {
    html! {
        @if present {
            span class="green-icon" { "✔" }
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
