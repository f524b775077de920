//! Playback context - shared playback state
//!
//! Holds the episode list, the index of the current episode and the
//! transport flags. Every UI surface (player footer, episode pages, JS
//! bindings) reads and mutates this one object.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    shuffle::pick_random_index,
    types::{PlaybackConfig, PlaybackState},
};
use podcastr_core::Episode;
use rand::Rng;

/// Every mutation the context supports, for reducer-style owners
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    /// Replace the list with a single episode and start it
    Play(Episode),

    /// Replace the list and start at `index`
    PlayList { episodes: Vec<Episode>, index: usize },

    TogglePlay,
    ToggleLoop,
    ToggleShuffle,

    /// Mirror a play/pause that happened on the media element itself
    SetPlayingState(bool),

    PlayNext,
    PlayPrevious,

    /// The media element reached the end of the current episode
    EpisodeEnded,

    /// Drop the list and deselect
    Clear,
}

/// Shared playback state
///
/// Invariant: `current_index` is `Some(i)` with `i < episode_list.len()`
/// whenever the list is non-empty, and `None` when it is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerContext {
    episode_list: Vec<Episode>,
    current_index: Option<usize>,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    autoplay: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerContext {
    /// Create an empty context
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            episode_list: Vec::new(),
            current_index: None,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            autoplay: config.autoplay,
            pending_events: Vec::new(),
        }
    }

    // ===== Selection =====

    /// Play a single episode
    pub fn play(&mut self, episode: Episode) {
        tracing::debug!(episode_id = %episode.id, "play episode");
        self.load(vec![episode], 0);
    }

    /// Play `episodes` starting at `index`
    ///
    /// An empty list clears the context.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if episodes.is_empty() {
            self.clear();
            return Ok(());
        }

        if index >= episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }

        tracing::debug!(len = episodes.len(), index, "play list");
        self.load(episodes, index);
        Ok(())
    }

    fn load(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episode_list = episodes;
        self.current_index = Some(index);
        self.is_playing = self.autoplay;

        self.emit(PlayerEvent::QueueChanged {
            length: self.episode_list.len(),
        });
        self.emit_episode_changed();
        self.emit_state_changed();
    }

    /// Drop the episode list and stop
    pub fn clear(&mut self) {
        tracing::debug!("clear player state");
        self.episode_list.clear();
        self.current_index = None;
        self.is_playing = false;
        self.emit(PlayerEvent::Cleared);
        self.emit_state_changed();
    }

    // ===== Transport =====

    /// Flip play/pause
    ///
    /// Does nothing while no episode is selected.
    pub fn toggle_play(&mut self) {
        if self.current_index.is_none() {
            return;
        }
        self.is_playing = !self.is_playing;
        self.emit_state_changed();
    }

    /// Record a play/pause that originated on the media element
    /// (keyboard, media keys, OS controls).
    pub fn set_playing_state(&mut self, playing: bool) {
        let playing = playing && self.current_index.is_some();
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit_state_changed();
        }
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.emit_mode_changed();
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.emit_mode_changed();
    }

    // ===== Navigation =====

    /// Advance to the next episode, using the thread-local RNG for shuffle
    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    /// Advance to the next episode
    ///
    /// While shuffling, picks a random episode other than the current one.
    /// Otherwise moves one forward. Does nothing when there is no next.
    pub fn play_next_with<R: Rng>(&mut self, rng: &mut R) {
        if !self.has_next() {
            return;
        }
        let Some(current) = self.current_index else {
            return;
        };

        let next = if self.is_shuffling {
            match pick_random_index(rng, self.episode_list.len(), current) {
                Some(index) => index,
                None => return,
            }
        } else {
            current + 1
        };

        tracing::debug!(from = current, to = next, shuffle = self.is_shuffling, "play next");
        self.select(next);
    }

    /// Step back one episode, if there is one
    pub fn play_previous(&mut self) {
        if !self.has_previous() {
            return;
        }
        if let Some(current) = self.current_index {
            tracing::debug!(from = current, to = current - 1, "play previous");
            self.select(current - 1);
        }
    }

    /// The current episode played to its end
    ///
    /// Advances when there is a next episode, otherwise clears.
    pub fn episode_ended(&mut self) {
        self.episode_ended_with(&mut rand::thread_rng());
    }

    pub fn episode_ended_with<R: Rng>(&mut self, rng: &mut R) {
        if self.has_next() {
            self.play_next_with(rng);
        } else {
            self.clear();
        }
    }

    /// Move to `index` within the current list
    ///
    /// The element reloads its source, so `is_playing` is reset from
    /// `autoplay` as on a fresh selection. A `pause` reported just before
    /// `ended` must not carry over to the next episode.
    fn select(&mut self, index: usize) {
        self.current_index = Some(index);
        self.emit_episode_changed();

        if self.is_playing != self.autoplay {
            self.is_playing = self.autoplay;
            self.emit_state_changed();
        }
    }

    /// Apply one action
    pub fn apply(&mut self, action: PlayerAction) -> Result<()> {
        match action {
            PlayerAction::Play(episode) => self.play(episode),
            PlayerAction::PlayList { episodes, index } => self.play_list(episodes, index)?,
            PlayerAction::TogglePlay => self.toggle_play(),
            PlayerAction::ToggleLoop => self.toggle_loop(),
            PlayerAction::ToggleShuffle => self.toggle_shuffle(),
            PlayerAction::SetPlayingState(playing) => self.set_playing_state(playing),
            PlayerAction::PlayNext => self.play_next(),
            PlayerAction::PlayPrevious => self.play_previous(),
            PlayerAction::EpisodeEnded => self.episode_ended(),
            PlayerAction::Clear => self.clear(),
        }
        Ok(())
    }

    // ===== State Queries =====

    /// True when advancing would select another episode
    pub fn has_next(&self) -> bool {
        match self.current_index {
            None => false,
            Some(_) if self.is_shuffling => self.episode_list.len() > 1,
            Some(index) => index + 1 < self.episode_list.len(),
        }
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|index| self.episode_list.get(index))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn len(&self) -> usize {
        self.episode_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether a newly selected episode starts playing on its own
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn state(&self) -> PlaybackState {
        match (self.current_index, self.is_playing) {
            (None, _) => PlaybackState::Empty,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    // ===== Events =====

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self) {
        let state = self.state();
        self.emit(PlayerEvent::StateChanged { state });
    }

    fn emit_episode_changed(&mut self) {
        if let Some(index) = self.current_index {
            if let Some(episode) = self.episode_list.get(index) {
                let episode_id = episode.id.clone();
                self.emit(PlayerEvent::EpisodeChanged { episode_id, index });
            }
        }
    }

    fn emit_mode_changed(&mut self) {
        self.emit(PlayerEvent::ModeChanged {
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
        });
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn episode(id: &str) -> Episode {
        Episode::new(id, format!("Episode {}", id), format!("https://example.com/{}.mp3", id), 1800)
    }

    fn episodes(count: usize) -> Vec<Episode> {
        (0..count).map(|i| episode(&format!("ep{}", i))).collect()
    }

    #[test]
    fn starts_empty() {
        let ctx = PlayerContext::default();
        assert!(ctx.is_empty());
        assert_eq!(ctx.current_index(), None);
        assert!(ctx.current_episode().is_none());
        assert!(!ctx.has_next());
        assert!(!ctx.has_previous());
        assert_eq!(ctx.state(), PlaybackState::Empty);
    }

    #[test]
    fn play_single_episode() {
        let mut ctx = PlayerContext::default();
        ctx.play(episode("solo"));

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.current_index(), Some(0));
        assert_eq!(ctx.current_episode().unwrap().id, "solo");
        assert!(ctx.is_playing());
        assert!(!ctx.has_next());
        assert!(!ctx.has_previous());
    }

    #[test]
    fn play_list_at_index() {
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(4), 2).unwrap();

        assert_eq!(ctx.current_episode().unwrap().id, "ep2");
        assert!(ctx.has_next());
        assert!(ctx.has_previous());
    }

    #[test]
    fn play_list_rejects_bad_index() {
        let mut ctx = PlayerContext::default();
        let err = ctx.play_list(episodes(2), 2).unwrap_err();

        assert_eq!(err, PlaybackError::IndexOutOfBounds { index: 2, len: 2 });
        assert!(ctx.is_empty());
    }

    #[test]
    fn play_empty_list_clears() {
        let mut ctx = PlayerContext::default();
        ctx.play(episode("a"));
        ctx.play_list(Vec::new(), 0).unwrap();

        assert!(ctx.is_empty());
        assert_eq!(ctx.current_index(), None);
        assert!(!ctx.is_playing());
    }

    #[test]
    fn next_and_previous_walk_the_list() {
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(3), 0).unwrap();

        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(1));
        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(2));
        assert!(!ctx.has_next());

        // No next: stays put
        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(2));

        ctx.play_previous();
        ctx.play_previous();
        assert_eq!(ctx.current_index(), Some(0));
        assert!(!ctx.has_previous());

        // No previous: stays put
        ctx.play_previous();
        assert_eq!(ctx.current_index(), Some(0));
    }

    #[test]
    fn shuffle_next_picks_other_episode() {
        let mut ctx = PlayerContext::default();
        let mut rng = StdRng::seed_from_u64(9);
        ctx.play_list(episodes(5), 4).unwrap();
        ctx.toggle_shuffle();

        // Shuffling makes the last episode advanceable
        assert!(ctx.has_next());

        for _ in 0..50 {
            let before = ctx.current_index().unwrap();
            ctx.play_next_with(&mut rng);
            let after = ctx.current_index().unwrap();
            assert_ne!(before, after);
            assert!(after < 5);
        }
    }

    #[test]
    fn shuffle_with_single_episode_has_no_next() {
        let mut ctx = PlayerContext::default();
        ctx.play(episode("only"));
        ctx.toggle_shuffle();

        assert!(!ctx.has_next());
        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(0));
    }

    #[test]
    fn toggle_play_ignored_when_empty() {
        let mut ctx = PlayerContext::default();
        ctx.toggle_play();
        assert!(!ctx.is_playing());

        ctx.play(episode("a"));
        ctx.toggle_play();
        assert!(!ctx.is_playing());
        ctx.toggle_play();
        assert!(ctx.is_playing());
    }

    #[test]
    fn set_playing_state_requires_episode() {
        let mut ctx = PlayerContext::default();
        ctx.set_playing_state(true);
        assert!(!ctx.is_playing());

        ctx.play(episode("a"));
        ctx.set_playing_state(false);
        assert_eq!(ctx.state(), PlaybackState::Paused);
        ctx.set_playing_state(true);
        assert_eq!(ctx.state(), PlaybackState::Playing);
    }

    #[test]
    fn loop_and_shuffle_survive_clear() {
        let mut ctx = PlayerContext::default();
        ctx.play(episode("a"));
        ctx.toggle_loop();
        ctx.toggle_shuffle();
        ctx.clear();

        assert!(ctx.is_looping());
        assert!(ctx.is_shuffling());
        assert!(ctx.is_empty());
    }

    #[test]
    fn config_sets_initial_flags() {
        let ctx = PlayerContext::new(PlaybackConfig {
            looping: true,
            shuffling: true,
            autoplay: false,
        });
        assert!(ctx.is_looping());
        assert!(ctx.is_shuffling());
    }

    #[test]
    fn autoplay_off_selects_paused() {
        let mut ctx = PlayerContext::new(PlaybackConfig {
            autoplay: false,
            ..PlaybackConfig::default()
        });
        ctx.play(episode("a"));

        assert_eq!(ctx.state(), PlaybackState::Paused);
    }

    #[test]
    fn navigation_resumes_paused_playback() {
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(3), 0).unwrap();
        ctx.toggle_play();
        ctx.drain_events();

        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(1));
        assert!(ctx.is_playing());
        assert_eq!(
            ctx.drain_events(),
            vec![
                PlayerEvent::EpisodeChanged {
                    episode_id: "ep1".to_string(),
                    index: 1
                },
                PlayerEvent::StateChanged {
                    state: PlaybackState::Playing
                },
            ]
        );

        ctx.set_playing_state(false);
        ctx.play_previous();
        assert_eq!(ctx.current_index(), Some(0));
        assert!(ctx.is_playing());
    }

    #[test]
    fn navigation_without_autoplay_stays_paused() {
        let mut ctx = PlayerContext::new(PlaybackConfig {
            autoplay: false,
            ..PlaybackConfig::default()
        });
        ctx.play_list(episodes(2), 0).unwrap();
        ctx.set_playing_state(true);

        ctx.play_next();
        assert_eq!(ctx.current_index(), Some(1));
        assert!(!ctx.is_playing());
    }

    #[test]
    fn ended_after_native_pause_keeps_playing() {
        // Browsers fire `pause` right before `ended`
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(2), 0).unwrap();

        ctx.apply(PlayerAction::SetPlayingState(false)).unwrap();
        ctx.apply(PlayerAction::EpisodeEnded).unwrap();

        assert_eq!(ctx.current_episode().unwrap().id, "ep1");
        assert_eq!(ctx.state(), PlaybackState::Playing);
    }

    #[test]
    fn ended_on_last_episode_clears() {
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(2), 1).unwrap();

        ctx.apply(PlayerAction::SetPlayingState(false)).unwrap();
        ctx.apply(PlayerAction::EpisodeEnded).unwrap();

        assert!(ctx.is_empty());
        assert_eq!(ctx.state(), PlaybackState::Empty);
    }

    #[test]
    fn ended_while_shuffling_picks_another_episode() {
        let mut ctx = PlayerContext::default();
        let mut rng = StdRng::seed_from_u64(3);
        ctx.play_list(episodes(3), 2).unwrap();
        ctx.toggle_shuffle();

        for _ in 0..10 {
            let before = ctx.current_index();
            ctx.set_playing_state(false);
            ctx.episode_ended_with(&mut rng);
            assert_ne!(ctx.current_index(), before);
            assert!(ctx.is_playing());
        }
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut ctx = PlayerContext::default();
        ctx.apply(PlayerAction::PlayList {
            episodes: episodes(2),
            index: 0,
        })
        .unwrap();
        ctx.apply(PlayerAction::PlayNext).unwrap();
        assert_eq!(ctx.current_index(), Some(1));

        ctx.apply(PlayerAction::TogglePlay).unwrap();
        assert!(!ctx.is_playing());

        ctx.apply(PlayerAction::ToggleLoop).unwrap();
        assert!(ctx.is_looping());

        ctx.apply(PlayerAction::Clear).unwrap();
        assert!(ctx.is_empty());

        let err = ctx
            .apply(PlayerAction::PlayList {
                episodes: episodes(1),
                index: 5,
            })
            .unwrap_err();
        assert!(matches!(err, PlaybackError::IndexOutOfBounds { .. }));
    }

    #[test]
    fn events_describe_changes() {
        let mut ctx = PlayerContext::default();
        ctx.play_list(episodes(2), 0).unwrap();

        let events = ctx.drain_events();
        assert_eq!(
            events,
            vec![
                PlayerEvent::QueueChanged { length: 2 },
                PlayerEvent::EpisodeChanged {
                    episode_id: "ep0".to_string(),
                    index: 0
                },
                PlayerEvent::StateChanged {
                    state: PlaybackState::Playing
                },
            ]
        );
        assert!(!ctx.has_pending_events());

        ctx.toggle_loop();
        ctx.clear();
        assert_eq!(
            ctx.drain_events(),
            vec![
                PlayerEvent::ModeChanged {
                    is_looping: true,
                    is_shuffling: false
                },
                PlayerEvent::Cleared,
                PlayerEvent::StateChanged {
                    state: PlaybackState::Empty
                },
            ]
        );
    }

    #[test]
    fn redundant_set_playing_state_is_silent() {
        let mut ctx = PlayerContext::default();
        ctx.play(episode("a"));
        ctx.drain_events();

        ctx.set_playing_state(true);
        assert!(!ctx.has_pending_events());
    }
}
