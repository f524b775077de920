//! `MediaElement` backed by the page's `<audio>` element

use podcastr_playback::{MediaElement, PlaybackError, Result};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;
use yew::NodeRef;

pub struct AudioElement(HtmlMediaElement);

impl AudioElement {
    /// The element behind `node`, if it is mounted
    pub fn from_node_ref(node: &NodeRef) -> Option<Self> {
        node.cast::<HtmlMediaElement>().map(Self)
    }
}

impl MediaElement for AudioElement {
    fn play(&mut self) -> Result<()> {
        let promise = self
            .0
            .play()
            .map_err(|e| PlaybackError::Media(format!("{:?}", e)))?;

        // Autoplay policy rejections arrive asynchronously
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::warn!(error = ?e, "audio element refused to play");
            }
        });
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.0
            .pause()
            .map_err(|e| PlaybackError::Media(format!("{:?}", e)))
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_loop(&mut self, looping: bool) {
        self.0.set_loop(looping);
    }
}
