use crate::route::Route;
use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

/// `Thu, 8 April`
const DATE_FORMAT: &str = "%a, %-d %B";

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub tagline: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let today = Local::now().format(DATE_FORMAT).to_string();

    html! {
        <header class="header-container">
            <Link<Route> to={Route::Home}>
                <img src="/public/logo.svg" alt={props.title.clone()} />
            </Link<Route>>
            <p>{ props.tagline.clone() }</p>
            <span>{ today }</span>
        </header>
    }
}
