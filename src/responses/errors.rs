use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into the HTML error page with the matching status.
pub fn error_response(err: ServerError, app_name: &str) -> Response {
    let status = err.status();
    if status >= 500 {
        error!(error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }

    let page = error_page(app_name, status, &err.user_message()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
