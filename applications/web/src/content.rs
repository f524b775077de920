//! Bundled episode catalog
//!
//! Stands in for the content API: the JSON is compiled into the binary in
//! the API's record shape.

use podcastr_core::{Catalog, Result};

const EPISODES_JSON: &str = include_str!("../assets/episodes.json");

pub fn load_catalog() -> Result<Catalog> {
    Catalog::from_json(EPISODES_JSON)
}
