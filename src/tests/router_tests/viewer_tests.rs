use crate::config::ViewerOptions;
use crate::errors::{DataError, ServerError};
use crate::router::handle;
use crate::tests::utils::{app_for_source, body_string, get, init_test_app};

fn page(uri: &str) -> String {
    let app = init_test_app(ViewerOptions::default());
    let resp = handle(get(uri), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

fn cell_position(body: &str, code: &str) -> usize {
    body.find(&format!("<td>{code}</td>"))
        .unwrap_or_else(|| panic!("code {code} not rendered"))
}

#[test]
fn first_visit_uses_default_property_types() {
    let body = page("/");

    assert!(body.contains("Costa del Sol Property Viewer"));
    assert!(body.contains("Found 6 properties matching the criteria"));
    assert!(!body.contains("<td>96543210</td>"), "house excluded by default");
    assert!(!body.contains("<td>93210987</td>"), "chalet excluded by default");
}

#[test]
fn rows_are_sorted_by_code_descending() {
    let body = page("/");
    let order = [
        "99887766", "99001122", "98765432", "97654321", "95432109", "94321098",
    ];
    let positions: Vec<usize> = order.iter().map(|c| cell_position(&body, c)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn submitted_form_without_types_shows_everything() {
    let body = page("/?submitted=1");
    assert!(body.contains("Found 8 properties matching the criteria"));
}

#[test]
fn price_bounds_are_entered_in_thousands() {
    let body = page("/?submitted=1&price_min=100&price_max=300");
    assert!(body.contains("Found 4 properties matching the criteria"));
    assert!(body.contains("<td>299 999</td>"));
    assert!(!body.contains("<td>99 000</td>"));
}

#[test]
fn inverted_price_range_is_empty_not_an_error() {
    let body = page("/?price_min=10000&price_max=0");
    assert!(body.contains("Found 0 properties matching the criteria"));
}

#[test]
fn amenity_and_municipality_filters_combine() {
    let body = page("/?submitted=1&restaurants=Yes");
    assert!(body.contains("Found 4 properties matching the criteria"));

    let body = page(
        "/?submitted=1&municipality=Torremolinos&municipality=Mijas&restaurants=No",
    );
    assert!(body.contains("Found 2 properties matching the criteria"));
}

#[test]
fn roi_range_is_percent_scaled() {
    let body = page("/?submitted=1&roi_min=9&roi_max=10");
    assert!(body.contains("Found 2 properties matching the criteria"));
    assert!(body.contains("<td>9.1 %</td>"));
}

#[test]
fn roi_filter_can_be_switched_off() {
    let app = init_test_app(ViewerOptions {
        roi_filter: false,
        tooltips: false,
    });
    let resp = handle(get("/?submitted=1&roi_min=9&roi_max=10"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Found 8 properties matching the criteria"));
    assert!(!body.contains("name=\"roi_min\""));
}

#[test]
fn page_renders_injected_fragments() {
    let body = page("/?submitted=1");
    assert!(body.contains(
        "<a href=\"https://www.idealista.com/inmueble/98765432/\" target=\"_blank\" rel=\"noopener noreferrer\">View</a>"
    ));
    assert!(body.contains("<span class=\"green-icon\">✔</span>"));
    assert!(body.contains("<td>Benalmádena</td>"));
}

#[test]
fn same_query_renders_identically() {
    let app = init_test_app(ViewerOptions::default());
    let uri = "/?submitted=1&size_min=50&shops=Yes";
    let first = body_string(handle(get(uri), &app).unwrap());
    let _other = body_string(handle(get("/?submitted=1&clinics=No"), &app).unwrap());
    let second = body_string(handle(get(uri), &app).unwrap());
    assert_eq!(first, second);
}

#[test]
fn dataset_is_loaded_once_per_process() {
    let app = init_test_app(ViewerOptions::default());
    for uri in ["/", "/?submitted=1", "/?price_max=200"] {
        handle(get(uri), &app).unwrap();
    }
    assert_eq!(app.cached_datasets(), 1);
}

#[test]
fn malformed_query_is_a_bad_request() {
    let app = init_test_app(ViewerOptions::default());
    let err = handle(get("/?size_min=big"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app(ViewerOptions::default());
    assert!(matches!(
        handle(get("/admin"), &app).unwrap_err(),
        ServerError::NotFound
    ));
}

#[test]
fn unreadable_source_surfaces_a_data_error() {
    let app = app_for_source("data/does_not_exist.csv", ViewerOptions::default());
    let err = handle(get("/"), &app).unwrap_err();
    assert!(matches!(err, ServerError::Data(DataError::Read { .. })));
    assert_eq!(app.cached_datasets(), 0);
}

#[test]
fn health_reports_ok() {
    let app = init_test_app(ViewerOptions::default());
    let body = body_string(handle(get("/health"), &app).unwrap());
    assert!(body.starts_with("ok"));
}
