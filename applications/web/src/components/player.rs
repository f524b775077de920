//! Persistent player footer
//!
//! Renders `PlayerView` and owns the page's single `<audio>` element. The
//! element exists only while an episode is selected.

use crate::context::use_player;
use crate::media::AudioElement;
use podcastr_playback::{MediaElement, PlayerAction, PlayerController, PlayerView};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(Player)]
pub fn player() -> Html {
    let player = use_player();
    let audio_ref = use_node_ref();
    let controller = use_state(PlayerController::new);

    let view = PlayerView::from_context(&player.ctx, controller.progress());
    let episode_id = view.episode.as_ref().map(|episode| episode.id.clone());

    // Mirror play/pause onto the element
    {
        let audio_ref = audio_ref.clone();
        let player = player.clone();
        let controller = *controller;
        use_effect_with(
            (player.ctx.is_playing(), episode_id.clone()),
            move |_| {
                if let Some(mut element) = AudioElement::from_node_ref(&audio_ref) {
                    if let Err(e) = controller.sync_playing(&player.ctx, &mut element) {
                        tracing::warn!(error = %e, "could not sync play state");
                    }
                }
            },
        );
    }

    // Mirror the loop flag; re-run when a new element mounts
    {
        let audio_ref = audio_ref.clone();
        let player = player.clone();
        let controller = *controller;
        use_effect_with((player.ctx.is_looping(), episode_id), move |_| {
            if let Some(mut element) = AudioElement::from_node_ref(&audio_ref) {
                controller.sync_loop(&player.ctx, &mut element);
            }
        });
    }

    let on_loaded_metadata = {
        let audio_ref = audio_ref.clone();
        let controller = controller.clone();
        Callback::from(move |_: Event| {
            if let Some(mut element) = AudioElement::from_node_ref(&audio_ref) {
                let mut next = *controller;
                next.on_loaded_metadata(&mut element);
                controller.set(next);
            }
        })
    };

    let on_time_update = {
        let audio_ref = audio_ref.clone();
        let controller = controller.clone();
        Callback::from(move |_: Event| {
            if let Some(element) = AudioElement::from_node_ref(&audio_ref) {
                let mut next = *controller;
                next.on_time_update(element.current_time());
                if next != *controller {
                    controller.set(next);
                }
            }
        })
    };

    let on_seek = {
        let audio_ref = audio_ref.clone();
        let controller = controller.clone();
        let player = player.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(mut element) = AudioElement::from_node_ref(&audio_ref) else {
                return;
            };

            let mut next = *controller;
            match next.seek(&player.ctx, &mut element, input.value_as_number()) {
                Ok(()) => controller.set(next),
                Err(e) => tracing::warn!(error = %e, "seek ignored"),
            }
        })
    };

    // Advance-or-clear is decided by the reducer against the latest state
    let on_ended = {
        let controller = controller.clone();
        let player = player.clone();
        Callback::from(move |_: Event| {
            let mut next = *controller;
            let action = next.on_ended();
            controller.set(next);
            player.dispatch(action);
        })
    };

    let on_play = {
        let player = player.clone();
        Callback::from(move |_: Event| player.dispatch(PlayerController::on_native_playing(true)))
    };

    let on_pause = {
        let player = player.clone();
        Callback::from(move |_: Event| player.dispatch(PlayerController::on_native_playing(false)))
    };

    let dispatch = |action: PlayerAction| {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.dispatch(action.clone()))
    };

    html! {
        <div class="player-container" data-state={view.state.as_str()}>
            <header>
                <img src="/public/playing.svg" alt="Tocando agora" />
                <strong>{ "Tocando agora" }</strong>
            </header>

            {
                match &view.episode {
                    Some(episode) => html! {
                        <div class="current-episode">
                            <img
                                width="592"
                                height="592"
                                src={episode.thumbnail.clone()}
                                alt={episode.title.clone()}
                            />
                            <strong>{ &episode.title }</strong>
                            <span>{ &episode.members }</span>
                        </div>
                    },
                    None => html! {
                        <div class="empty-player">
                            <strong>{ "Selecione um podcast para ouvir" }</strong>
                        </div>
                    },
                }
            }

            <footer class={classes!(view.is_empty().then_some("empty"))}>
                <div class="progress">
                    <span>{ &view.progress_label }</span>
                    <div class="slider">
                        if view.is_empty() {
                            <div class="empty-slider" />
                        } else {
                            <input
                                type="range"
                                min="0"
                                max={view.slider_max.to_string()}
                                value={view.progress.to_string()}
                                oninput={on_seek}
                            />
                        }
                    </div>
                    <span>{ &view.duration_label }</span>
                </div>

                if let Some(episode) = &view.episode {
                    <audio
                        ref={audio_ref}
                        src={episode.url.clone()}
                        autoplay={player.ctx.autoplay()}
                        onended={on_ended}
                        onplay={on_play}
                        onpause={on_pause}
                        onloadedmetadata={on_loaded_metadata}
                        ontimeupdate={on_time_update}
                    />
                }

                <div class="buttons">
                    <button
                        type="button"
                        disabled={!view.shuffle.enabled}
                        class={classes!(view.shuffle.active.then_some("is-active"))}
                        onclick={dispatch(PlayerAction::ToggleShuffle)}
                    >
                        <img src="/public/shuffle.svg" alt="Aleatório" />
                    </button>

                    <button
                        type="button"
                        disabled={!view.previous.enabled}
                        onclick={dispatch(PlayerAction::PlayPrevious)}
                    >
                        <img src="/public/play-previous.svg" alt="Tocar anterior" />
                    </button>

                    <button
                        type="button"
                        class="play-button"
                        disabled={!view.play.enabled}
                        onclick={dispatch(PlayerAction::TogglePlay)}
                    >
                        if view.is_playing {
                            <img src="/public/pause.svg" alt="Pausar" />
                        } else {
                            <img src="/public/play.svg" alt="Tocar" />
                        }
                    </button>

                    <button
                        type="button"
                        disabled={!view.next.enabled}
                        onclick={dispatch(PlayerAction::PlayNext)}
                    >
                        <img src="/public/play-next.svg" alt="Tocar próxima" />
                    </button>

                    <button
                        type="button"
                        disabled={!view.repeat.enabled}
                        class={classes!(view.repeat.active.then_some("is-active"))}
                        onclick={dispatch(PlayerAction::ToggleLoop)}
                    >
                        <img src="/public/repeat.svg" alt="Repetir" />
                    </button>
                </div>
            </footer>
        </div>
    }
}
