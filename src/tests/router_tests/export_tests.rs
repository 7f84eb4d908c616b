use crate::config::ViewerOptions;
use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, init_test_app};

#[test]
fn export_returns_a_spreadsheet() {
    let app = init_test_app(ViewerOptions::default());
    let resp = handle(get("/export.xlsx?submitted=1&restaurants=Yes"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("listings.xlsx"));

    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn viewer_links_to_export_with_the_same_filters() {
    let app = init_test_app(ViewerOptions::default());
    let resp = handle(get("/?submitted=1&price_max=250&shops=Yes"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("/export.xlsx?submitted=1&amp;price_min="));
    assert!(body.contains("price_max=250"));
    assert!(body.contains("shops=Yes"));
}

#[test]
fn export_filename_follows_a_single_municipality() {
    let app = init_test_app(ViewerOptions::default());
    let resp = handle(get("/export.xlsx?submitted=1&municipality=Mijas"), &app).unwrap();

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"listings_mijas.xlsx\"");
    assert_eq!(resp.headers().get("Cache-Control").unwrap(), "no-store");
}
