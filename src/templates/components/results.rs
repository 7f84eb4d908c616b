use crate::view::{Cell, FilteredView, COLUMNS};
use maud::{html, Markup};

/// Results count plus the table. Cell text is escaped; only the link and
/// amenity fragments are emitted as markup.
pub fn results_table(view: &FilteredView<'_>, tooltips: bool) -> Markup {
    html! {
        section class="results" {
            h2 { "Search Results" }
            p class="summary" { (view.summary()) }

            table {
                thead {
                    tr {
                        @for column in &COLUMNS {
                            @let tip = (tooltips && !column.tooltip.is_empty()).then_some(column.tooltip);
                            th title=[tip] { (column.label) }
                        }
                    }
                }
                tbody {
                    @for row in &view.rows {
                        tr {
                            @for cell in row.cells() {
                                td {
                                    @match cell {
                                        Cell::Text(text) => { (text) }
                                        Cell::Html(markup) => { (markup) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
