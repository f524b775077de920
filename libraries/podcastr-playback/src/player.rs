//! Player controller and view model
//!
//! `PlayerController` wires a `MediaElement` to the `PlayerContext`: it
//! mirrors the context flags onto the element and turns element events
//! (metadata loaded, time update, ended, native play/pause) back into
//! `PlayerAction`s for whoever owns the context. `PlayerView` is the render-ready snapshot the player
//! footer draws from.

use crate::{
    context::{PlayerAction, PlayerContext},
    error::{PlaybackError, Result},
    media::MediaElement,
    types::PlaybackState,
};
use podcastr_core::{format_duration, Episode};

/// Time label shown while nothing is selected
pub const EMPTY_TIME_LABEL: &str = "00:00";

/// Drives one media element from the playback context
///
/// The only state it owns is the progress shown on the slider, in whole
/// seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerController {
    progress: u32,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds played, as shown on the slider
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Mirror `is_playing` onto the element
    ///
    /// Run whenever `is_playing` changes. Without an episode there is no
    /// element to drive and nothing happens.
    pub fn sync_playing<M: MediaElement + ?Sized>(
        &self,
        ctx: &PlayerContext,
        media: &mut M,
    ) -> Result<()> {
        if ctx.current_episode().is_none() {
            return Ok(());
        }

        if ctx.is_playing() {
            media.play()
        } else {
            media.pause()
        }
    }

    /// Mirror `is_looping` onto the element's native loop flag
    pub fn sync_loop<M: MediaElement + ?Sized>(&self, ctx: &PlayerContext, media: &mut M) {
        media.set_loop(ctx.is_looping());
    }

    /// New source loaded: rewind and reset progress
    pub fn on_loaded_metadata<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        media.set_current_time(0.0);
        self.progress = 0;
    }

    /// Periodic position report from the element
    pub fn on_time_update(&mut self, current_time: f64) {
        self.progress = whole_seconds(current_time);
    }

    /// Slider moved: jump the element to `seconds`
    ///
    /// The position is clamped to the episode's duration.
    pub fn seek<M: MediaElement + ?Sized>(
        &mut self,
        ctx: &PlayerContext,
        media: &mut M,
        seconds: f64,
    ) -> Result<()> {
        let episode = ctx.current_episode().ok_or(PlaybackError::NoEpisodeLoaded)?;
        let position = if seconds.is_finite() {
            seconds.clamp(0.0, f64::from(episode.duration))
        } else {
            0.0
        };

        tracing::trace!(position, "seek");
        media.set_current_time(position);
        self.progress = whole_seconds(position);
        Ok(())
    }

    /// Episode finished: reset progress and hand the decision to the context
    ///
    /// The returned action advances when there is a next episode and clears
    /// otherwise.
    pub fn on_ended(&mut self) -> PlayerAction {
        self.progress = 0;
        PlayerAction::EpisodeEnded
    }

    /// Native play/pause happened (keyboard, media keys)
    pub fn on_native_playing(playing: bool) -> PlayerAction {
        PlayerAction::SetPlayingState(playing)
    }
}

fn whole_seconds(seconds: f64) -> u32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// State of one footer button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonView {
    pub enabled: bool,

    /// Highlighted (shuffle/loop switched on)
    pub active: bool,
}

impl ButtonView {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active: false,
        }
    }

    fn toggle(enabled: bool, active: bool) -> Self {
        Self { enabled, active }
    }
}

/// Everything the player footer needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    /// Current episode; `None` renders the empty placeholder
    pub episode: Option<Episode>,

    pub progress: u32,
    pub progress_label: String,

    /// Slider upper bound in seconds
    pub slider_max: u32,
    pub duration_label: String,

    pub state: PlaybackState,
    pub is_playing: bool,
    pub is_looping: bool,

    pub shuffle: ButtonView,
    pub previous: ButtonView,
    pub play: ButtonView,
    pub next: ButtonView,
    pub repeat: ButtonView,
}

impl PlayerView {
    pub fn from_context(ctx: &PlayerContext, progress: u32) -> Self {
        let episode = ctx.current_episode().cloned();
        let has_episode = episode.is_some();

        let (progress, progress_label, slider_max, duration_label) = match &episode {
            Some(episode) => {
                let progress = progress.min(episode.duration);
                (
                    progress,
                    format_duration(progress),
                    episode.duration,
                    episode.duration_as_string.clone(),
                )
            }
            None => (
                0,
                EMPTY_TIME_LABEL.to_string(),
                0,
                EMPTY_TIME_LABEL.to_string(),
            ),
        };

        Self {
            episode,
            progress,
            progress_label,
            slider_max,
            duration_label,
            state: ctx.state(),
            is_playing: ctx.is_playing(),
            is_looping: ctx.is_looping(),
            shuffle: ButtonView::toggle(has_episode && ctx.len() > 1, ctx.is_shuffling()),
            previous: ButtonView::new(has_episode && ctx.has_previous()),
            play: ButtonView::new(has_episode),
            next: ButtonView::new(has_episode && ctx.has_next()),
            repeat: ButtonView::toggle(has_episode, ctx.is_looping()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.episode.is_none()
    }
}
