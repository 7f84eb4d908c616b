use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use log::warn;
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    warn!("Responding {status}: {err}");

    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="error" style="max-width: 720px; margin: 4rem auto; padding: 1rem;" {
                p style="font-size: 1.1rem; color: #444;" { (err) }
                p { a href="/" { "← Back to the viewer" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
