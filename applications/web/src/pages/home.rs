use crate::config::AppConfig;
use crate::context::use_player;
use crate::route::Route;
use podcastr_core::{Catalog, Episode};
use podcastr_playback::PlayerAction;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Latest episodes as cards, the rest as a table
#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let player = use_player();

    let latest = catalog.latest(config.home.latest_count);
    let remaining = catalog.remaining(config.home.latest_count);

    // Every play button queues the whole catalog, starting at its row
    let play_from = {
        let catalog = Rc::clone(&catalog);
        move |index: usize| {
            let catalog = Rc::clone(&catalog);
            let player = player.clone();
            Callback::from(move |_: MouseEvent| {
                player.dispatch(PlayerAction::PlayList {
                    episodes: catalog.episodes().to_vec(),
                    index,
                });
            })
        }
    };

    html! {
        <div class="homepage">
            <section class="latest-episodes">
                <h2>{ "Últimos lançamentos" }</h2>

                <ul>
                    { for latest.iter().enumerate().map(|(index, episode)| html! {
                        <LatestCard
                            key={episode.id.clone()}
                            episode={episode.clone()}
                            onplay={play_from(index)}
                        />
                    }) }
                </ul>
            </section>

            <section class="all-episodes">
                <h2>{ "Todos episódios" }</h2>

                <table cellspacing="0">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{ "Podcast" }</th>
                            <th>{ "Integrantes" }</th>
                            <th>{ "Data" }</th>
                            <th>{ "Duração" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for remaining.iter().enumerate().map(|(offset, episode)| html! {
                            <EpisodeRow
                                key={episode.id.clone()}
                                episode={episode.clone()}
                                onplay={play_from(latest.len() + offset)}
                            />
                        }) }
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EpisodeItemProps {
    episode: Episode,
    onplay: Callback<MouseEvent>,
}

#[function_component(LatestCard)]
fn latest_card(props: &EpisodeItemProps) -> Html {
    let episode = &props.episode;

    html! {
        <li>
            <img
                width="192"
                height="192"
                src={episode.thumbnail.clone()}
                alt={episode.title.clone()}
            />

            <div class="episode-details">
                <Link<Route> to={Route::Episode { id: episode.id.clone() }}>
                    { &episode.title }
                </Link<Route>>
                <p>{ &episode.members }</p>
                <span>{ &episode.published_at }</span>
                <span>{ &episode.duration_as_string }</span>
            </div>

            <button type="button" onclick={props.onplay.clone()}>
                <img src="/public/play-green.svg" alt="Tocar episódio" />
            </button>
        </li>
    }
}

#[function_component(EpisodeRow)]
fn episode_row(props: &EpisodeItemProps) -> Html {
    let episode = &props.episode;

    html! {
        <tr>
            <td style="width: 72px;">
                <img
                    width="120"
                    height="120"
                    src={episode.thumbnail.clone()}
                    alt={episode.title.clone()}
                />
            </td>
            <td>
                <Link<Route> to={Route::Episode { id: episode.id.clone() }}>
                    { &episode.title }
                </Link<Route>>
            </td>
            <td>{ &episode.members }</td>
            <td style="width: 100px;">{ &episode.published_at }</td>
            <td>{ &episode.duration_as_string }</td>
            <td>
                <button type="button" onclick={props.onplay.clone()}>
                    <img src="/public/play-green.svg" alt="Tocar episódio" />
                </button>
            </td>
        </tr>
    }
}
