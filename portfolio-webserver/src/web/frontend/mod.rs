use maud::Markup;
use rocket::{
    get,
    response::content::{RawCss, RawJavaScript},
    routes, Route,
};

mod view;


const MAIN_JS: &str = include_str!("main.js");
const MAIN_CSS: &str = include_str!("main.css");

pub fn routes() -> Vec<Route> {
    routes![get_index, get_index_html, get_main_js, get_main_css]
}

#[get("/")]
pub fn get_index() -> Markup {
    view::index()
}

#[get("/index.html")]
pub fn get_index_html() -> Markup {
    view::index()
}

#[get("/main.js")]
pub fn get_main_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAIN_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}
