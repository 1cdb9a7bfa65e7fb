// src/handlers/pages.rs
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates::pages::{home_page, privacy_page, tos_page};
use crate::templates::PageCtx;

const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn home(ctx: PageCtx<'_>) -> ResultResp {
    html_response(home_page(ctx))
}

pub fn privacy(ctx: PageCtx<'_>) -> ResultResp {
    html_response(privacy_page(ctx))
}

pub fn tos(ctx: PageCtx<'_>) -> ResultResp {
    html_response(tos_page(ctx))
}

pub fn stylesheet() -> ResultResp {
    css_response(MAIN_CSS)
}
