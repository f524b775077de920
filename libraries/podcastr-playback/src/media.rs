//! Media element abstraction
//!
//! The player never decodes audio itself. It drives whatever native media
//! element the platform provides (an `<audio>` element in the browser)
//! through this trait.

use crate::error::Result;

/// Platform media element
///
/// Implementations forward to the native element. Positions are in seconds.
pub trait MediaElement {
    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Current playback position
    fn current_time(&self) -> f64;

    /// Move the playback position
    fn set_current_time(&mut self, seconds: f64);

    /// Set the native loop flag
    fn set_loop(&mut self, looping: bool);
}
