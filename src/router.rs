use crate::app::App;
use crate::errors::ServerError;
use crate::filters::{FilterRegistry, FilterState, QueryParams};
use crate::responses::{html_response, text_response, ResultResp};
use crate::spreadsheets::{export_filename, export_listings_xlsx};
use crate::templates::pages::{viewer_page, ViewerVm};
use crate::view::build_view;
use astra::Request;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => viewer(&req, app),
        ("GET", "/export.xlsx") => export(&req, app),
        ("GET", "/health") => text_response(format!(
            "ok\ncached datasets: {}\n",
            app.cached_datasets()
        )),
        _ => Err(ServerError::NotFound),
    }
}

fn viewer(req: &Request, app: &App) -> ResultResp {
    let dataset = app.dataset()?;
    let registry = FilterRegistry::from_dataset(&dataset, app.config.options)?;
    let state = FilterState::from_query(&QueryParams::parse(req.uri().query()), &registry)?;

    let vm = ViewerVm {
        title: &app.config.title,
        controls: registry.controls(&state),
        view: build_view(&dataset, &state),
        export_href: format!("/export.xlsx?{}", state.to_query()),
        tooltips: app.config.options.tooltips,
    };

    html_response(viewer_page(&vm))
}

fn export(req: &Request, app: &App) -> ResultResp {
    let dataset = app.dataset()?;
    let registry = FilterRegistry::from_dataset(&dataset, app.config.options)?;
    let state = FilterState::from_query(&QueryParams::parse(req.uri().query()), &registry)?;

    export_listings_xlsx(&build_view(&dataset, &state).listings, &export_filename(&state))
}
