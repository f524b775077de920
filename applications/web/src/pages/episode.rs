use super::NotFound;
use crate::context::use_player;
use crate::route::Route;
use podcastr_core::Catalog;
use podcastr_playback::PlayerAction;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EpisodePageProps {
    pub id: String,
}

/// Single episode details
///
/// Unknown ids render the not-found page.
#[function_component(EpisodePage)]
pub fn episode_page(props: &EpisodePageProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let player = use_player();

    let episode = match catalog.find(&props.id) {
        Ok(episode) => episode.clone(),
        Err(e) => {
            tracing::info!(error = %e, "episode page miss");
            return html! { <NotFound /> };
        }
    };

    let onplay = {
        let episode = episode.clone();
        Callback::from(move |_: MouseEvent| player.dispatch(PlayerAction::Play(episode.clone())))
    };

    html! {
        <div class="episode">
            <div class="thumbnail-container">
                <Link<Route> to={Route::Home}>
                    <button type="button">
                        <img src="/public/arrow-left.svg" alt="Voltar" />
                    </button>
                </Link<Route>>
                <img
                    width="700"
                    height="160"
                    src={episode.thumbnail.clone()}
                    alt={episode.title.clone()}
                />
                <button type="button" class="play-episode" onclick={onplay}>
                    <img src="/public/play.svg" alt="Tocar episódio" />
                </button>
            </div>

            <header>
                <h1>{ &episode.title }</h1>
                <span>{ &episode.members }</span>
                <span>{ &episode.published_at }</span>
                <span>{ &episode.duration_as_string }</span>
            </header>

            <div class="description">
                { Html::from_html_unchecked(AttrValue::from(episode.description.clone())) }
            </div>
        </div>
    }
}
