//! Page routes

use crate::pages::{EpisodePage, Home, NotFound};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/episodes/:id")]
    Episode { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Episode { id } => html! { <EpisodePage {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
