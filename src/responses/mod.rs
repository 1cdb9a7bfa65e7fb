pub mod errors;
pub mod html;

pub use errors::{error_response, ResultResp};
pub use html::{
    css_response, html_response, html_response_with_status, redirect, redirect_with_cookie,
};
