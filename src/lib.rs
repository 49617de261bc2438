//! Hangman web crate.
//!
//! A phrase is drawn from a categorized catalog, the player guesses characters
//! through the on-screen keyboard or the physical keyboard, and every miss adds
//! a body part to the gallows on a canvas. `start_game()` mounts the game onto
//! the page and returns a [`Hangman`] handle that JS must keep alive.
//!
//! The game rules (`phrases`, `game::session`, `game::keyboard`,
//! `game::gallows`) are plain Rust and run natively under `cargo test`; only
//! the controller and rendering touch the DOM.

use wasm_bindgen::prelude::*;

mod error;
pub mod game;
mod logging;
mod options;
mod phrases;

pub use error::ConfigurationError;
pub use game::{BodyPart, GameState, GuessOutcome, Hangman, KeyMark, MAX_INCORRECT, Session};
pub use options::{ElementIds, GameOptions, RevealCase};
pub use phrases::{Catalog, Category, PHRASES, Selection};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Mount a game with the builtin phrases onto the default page elements.
#[wasm_bindgen]
pub fn start_game() -> Result<Hangman, JsValue> {
    Hangman::mount(&GameOptions::default())
}

/// Mount a game configured by a JSON [`GameOptions`] document.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_options(json: &str) -> Result<Hangman, JsValue> {
    let options = GameOptions::from_json(json).inspect_err(|err| {
        tracing::error!(%err, "rejecting game options");
    })?;
    Hangman::mount(&options)
}
