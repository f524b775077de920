//! Root shell: header and routed page above the persistent player

use crate::components::{Header, Player};
use crate::config::AppConfig;
use crate::context::PlayerContextProvider;
use crate::route::{switch, Route};
use podcastr_core::Catalog;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
    pub catalog: Rc<Catalog>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <ContextProvider<Rc<Catalog>> context={Rc::clone(&props.catalog)}>
                <ContextProvider<Rc<AppConfig>> context={Rc::clone(&props.config)}>
                    <PlayerContextProvider config={props.config.playback.clone()}>
                        <div class="wrapper">
                            <main>
                                <Header
                                    title={props.config.title.clone()}
                                    tagline={props.config.tagline.clone()}
                                />
                                <Switch<Route> render={switch} />
                            </main>
                            <Player />
                        </div>
                    </PlayerContextProvider>
                </ContextProvider<Rc<AppConfig>>>
            </ContextProvider<Rc<Catalog>>>
        </BrowserRouter>
    }
}
