//! Player context provider
//!
//! Wraps `PlayerContext` in a Yew reducer and shares the handle with every
//! component below `PlayerContextProvider`.

use podcastr_playback::{PlaybackConfig, PlayerAction, PlayerContext};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerStore {
    pub ctx: PlayerContext,
}

impl Reducible for PlayerStore {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ctx = self.ctx.clone();

        if let Err(e) = ctx.apply(action) {
            tracing::warn!(error = %e, "player action rejected");
            return self;
        }

        for event in ctx.drain_events() {
            tracing::debug!(?event, "player event");
        }

        Rc::new(Self { ctx })
    }
}

pub type PlayerHandle = UseReducerHandle<PlayerStore>;

#[derive(Properties, PartialEq)]
pub struct PlayerContextProviderProps {
    #[prop_or_default]
    pub config: PlaybackConfig,

    #[prop_or_default]
    pub children: Children,
}

#[function_component(PlayerContextProvider)]
pub fn player_context_provider(props: &PlayerContextProviderProps) -> Html {
    let config = props.config.clone();
    let store = use_reducer(move || PlayerStore {
        ctx: PlayerContext::new(config),
    });

    html! {
        <ContextProvider<PlayerHandle> context={store}>
            { for props.children.iter() }
        </ContextProvider<PlayerHandle>>
    }
}

/// Handle to the shared player state
///
/// Must be called below `PlayerContextProvider`.
#[hook]
pub fn use_player() -> PlayerHandle {
    use_context::<PlayerHandle>().expect("use_player called outside PlayerContextProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_core::Episode;
    use podcastr_playback::{PlaybackState, PlayerController};

    fn episode(id: &str) -> Episode {
        Episode::new(id, id, format!("https://example.com/{}.mp3", id), 60)
    }

    fn store_playing(ids: &[&str], index: usize) -> Rc<PlayerStore> {
        Rc::new(PlayerStore::default()).reduce(PlayerAction::PlayList {
            episodes: ids.iter().map(|id| episode(id)).collect(),
            index,
        })
    }

    fn reduce_all(store: Rc<PlayerStore>, actions: Vec<PlayerAction>) -> Rc<PlayerStore> {
        actions
            .into_iter()
            .fold(store, |store, action| store.reduce(action))
    }

    #[test]
    fn reduce_applies_action() {
        let store = Rc::new(PlayerStore::default());
        let next = store.reduce(PlayerAction::Play(episode("a")));

        assert_eq!(next.ctx.current_episode().unwrap().id, "a");
        assert!(!next.ctx.has_pending_events());
    }

    #[test]
    fn rejected_action_keeps_previous_state() {
        let store = Rc::new(PlayerStore::default());
        let store = store.reduce(PlayerAction::Play(episode("a")));

        let next = Rc::clone(&store).reduce(PlayerAction::PlayList {
            episodes: vec![episode("b")],
            index: 4,
        });

        assert!(Rc::ptr_eq(&store, &next));
        assert_eq!(next.ctx.current_episode().unwrap().id, "a");
    }

    #[test]
    fn ended_with_next_keeps_playing() {
        let mut controller = PlayerController::new();
        let store = store_playing(&["a", "b"], 0);

        let store = store.reduce(controller.on_ended());

        assert_eq!(store.ctx.current_episode().unwrap().id, "b");
        assert_eq!(store.ctx.state(), PlaybackState::Playing);
    }

    #[test]
    fn ended_on_last_episode_clears() {
        let mut controller = PlayerController::new();
        let store = store_playing(&["a", "b"], 1);

        let store = store.reduce(controller.on_ended());

        assert!(store.ctx.is_empty());
        assert_eq!(store.ctx.state(), PlaybackState::Empty);
    }

    #[test]
    fn pause_then_ended_resumes_on_next_episode() {
        let mut controller = PlayerController::new();
        let store = store_playing(&["a", "b", "c"], 0);

        let store = reduce_all(
            store,
            vec![
                PlayerController::on_native_playing(false),
                controller.on_ended(),
            ],
        );
        assert_eq!(store.ctx.current_episode().unwrap().id, "b");
        assert!(store.ctx.is_playing());

        // The new source starting reports `play`; nothing changes
        let store = store.reduce(PlayerController::on_native_playing(true));
        assert_eq!(store.ctx.state(), PlaybackState::Playing);
    }

    #[test]
    fn pause_then_ended_while_shuffling_keeps_playing() {
        let mut controller = PlayerController::new();
        let store = store_playing(&["a", "b", "c"], 2);
        let mut store = store.reduce(PlayerAction::ToggleShuffle);

        for _ in 0..10 {
            let before = store.ctx.current_index();
            store = reduce_all(
                store,
                vec![
                    PlayerController::on_native_playing(false),
                    controller.on_ended(),
                ],
            );
            assert_ne!(store.ctx.current_index(), before);
            assert!(store.ctx.is_playing());
        }
    }
}
