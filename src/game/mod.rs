//! Browser hangman: controller, input routing and the JS-facing handle.
//!
//! The controller owns the live [`Session`] and the page surfaces. It sits in an
//! `Rc<RefCell<_>>` held by the [`Hangman`] handle returned to JS; every event
//! closure only keeps a `Weak` to it, so dropping the handle tears the game down.
//!
//! Input routing (document `keydown` plus one delegated `click` on the keyboard
//! container) is rebuilt on every restart. The old [`Listener`]s are dropped
//! first, which detaches them, so exactly one handler set is live per session.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, window};

use crate::options::{GameOptions, RevealCase};
use crate::phrases::Catalog;

pub mod gallows;
pub mod keyboard;
mod render;
pub mod session;

pub use gallows::{BodyPart, MAX_INCORRECT};
pub use keyboard::KeyMark;
pub use session::{GameState, GuessOutcome, Session};

use render::Surfaces;

// --- Listener lifecycle -------------------------------------------------------

/// An attached DOM event listener. Dropping it removes the listener.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// The per-session input wiring: physical keys and on-screen keys.
struct InputRouting {
    _keydown: Listener,
    _clicks: Listener,
}

impl InputRouting {
    fn attach(me: &Weak<RefCell<Controller>>, surfaces: &Surfaces) -> Result<Self, JsValue> {
        let keys_owner = me.clone();
        let keydown = Listener::attach(surfaces.document(), "keydown", move |evt: Event| {
            let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if evt.ctrl_key() || evt.alt_key() || evt.meta_key() {
                return;
            }
            if let Some(key) = keyboard::key_from_event(&evt.key()) {
                evt.prevent_default();
                dispatch(&keys_owner, |c| c.guess(key));
            }
        })?;

        let clicks_owner = me.clone();
        let clicks = Listener::attach(surfaces.letters(), "click", move |evt: Event| {
            let Some(key) = clicked_key(&evt) else {
                return;
            };
            dispatch(&clicks_owner, |c| c.guess(key));
        })?;

        Ok(Self {
            _keydown: keydown,
            _clicks: clicks,
        })
    }
}

/// Key of the keyboard button an event originated from, if any.
fn clicked_key(evt: &Event) -> Option<char> {
    let target = evt.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!(".{}", render::KEY_CLASS)).ok()??;
    keyboard::key_from_event(&button.get_attribute(render::KEY_ATTR)?)
}

/// Run `f` against the live controller. Events for a dropped game, or arriving
/// while the controller is already borrowed, are discarded.
fn dispatch(me: &Weak<RefCell<Controller>>, f: impl FnOnce(&mut Controller) -> Result<(), JsValue>) {
    let Some(ctrl) = me.upgrade() else {
        return;
    };
    let Ok(mut ctrl) = ctrl.try_borrow_mut() else {
        return;
    };
    if let Err(err) = f(&mut *ctrl) {
        tracing::error!(?err, "event handler failed");
    }
}

// --- Controller ---------------------------------------------------------------

pub(crate) struct Controller {
    me: Weak<RefCell<Controller>>,
    surfaces: Surfaces,
    catalog: Catalog,
    rng: StdRng,
    reveal_case: RevealCase,
    session: Session,
    inputs: Option<InputRouting>,
    /// Shared by every "Play Again" button; lives as long as the controller.
    restart_handler: Closure<dyn FnMut(Event)>,
    /// Calls into `guess`, whatever the outcome.
    #[cfg(test)]
    routed_guesses: u32,
}

impl Controller {
    fn mount(options: &GameOptions) -> Result<Rc<RefCell<Self>>, JsValue> {
        let catalog = options.catalog().inspect_err(|err| {
            tracing::error!(%err, "refusing to start with invalid phrase catalog");
        })?;
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let doc = win
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let surfaces = Surfaces::locate(doc, &options.elements)?;

        let mut rng = StdRng::from_entropy();
        let session = Session::new(catalog.select_random_phrase(&mut rng));
        let reveal_case = options.reveal_case;

        let ctrl = Rc::new_cyclic(|me: &Weak<RefCell<Controller>>| {
            let owner = me.clone();
            let restart_handler = Closure::wrap(Box::new(move |_evt: Event| {
                dispatch(&owner, Controller::restart);
            }) as Box<dyn FnMut(Event)>);
            RefCell::new(Controller {
                me: me.clone(),
                surfaces,
                catalog,
                rng,
                reveal_case,
                session,
                inputs: None,
                restart_handler,
                #[cfg(test)]
                routed_guesses: 0,
            })
        });
        ctrl.borrow_mut().begin()?;
        Ok(ctrl)
    }

    /// Render the current session from scratch and wire its inputs.
    fn begin(&mut self) -> Result<(), JsValue> {
        tracing::info!(category = self.session.category(), "new game");
        tracing::debug!(phrase = self.session.phrase(), "phrase selected");

        self.surfaces.clear_outcome();
        self.surfaces.render_category(&self.session);
        self.surfaces.render_words(&self.session, self.reveal_case)?;
        self.surfaces.render_keyboard()?;
        self.surfaces.draw_scaffold()?;
        self.inputs = Some(InputRouting::attach(&self.me, &self.surfaces)?);
        Ok(())
    }

    fn restart(&mut self) -> Result<(), JsValue> {
        // Detach the old routing before anything else so it can never see the
        // new session.
        self.inputs = None;
        self.session = Session::new(self.catalog.select_random_phrase(&mut self.rng));
        self.begin()
    }

    fn guess(&mut self, key: char) -> Result<(), JsValue> {
        #[cfg(test)]
        {
            self.routed_guesses += 1;
        }
        let outcome = self.session.guess(key);
        match outcome {
            GuessOutcome::Ignored => return Ok(()),
            GuessOutcome::Repeated { key } => {
                self.surfaces.mark_key(key, self.session.mark(key))?;
                return Ok(());
            }
            GuessOutcome::Hit { key, .. } => {
                self.surfaces.mark_key(key, KeyMark::Correct)?;
                self.surfaces.render_words(&self.session, self.reveal_case)?;
            }
            GuessOutcome::Miss { key, part, .. } => {
                self.surfaces.mark_key(key, KeyMark::Wrong)?;
                self.surfaces.draw_part(part)?;
            }
        }
        tracing::debug!(
            ?outcome,
            incorrect = self.session.incorrect(),
            "guess processed"
        );
        if self.session.state().is_terminal() {
            self.finish()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), JsValue> {
        tracing::info!(
            state = self.session.state().as_str(),
            incorrect = self.session.incorrect(),
            "game over"
        );
        self.surfaces.disable_keys();
        if let Some(message) = self.session.outcome_message() {
            let restart = self.restart_handler.as_ref().unchecked_ref();
            self.surfaces.render_outcome(&message, restart)?;
        }
        Ok(())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        // Play Again buttons still reference `restart_handler`.
        self.inputs = None;
        self.surfaces.clear_outcome();
    }
}

// --- JS handle ----------------------------------------------------------------

/// A mounted game. Keep it alive for as long as the game should run; freeing
/// it detaches every listener.
#[wasm_bindgen]
pub struct Hangman {
    controller: Rc<RefCell<Controller>>,
}

impl Hangman {
    pub fn mount(options: &GameOptions) -> Result<Hangman, JsValue> {
        Ok(Hangman {
            controller: Controller::mount(options)?,
        })
    }

    fn with<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Result<T, JsValue> {
        let mut ctrl = self
            .controller
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("game is busy"))?;
        Ok(f(&mut *ctrl))
    }
}

#[wasm_bindgen]
impl Hangman {
    /// Guess a single character, exactly as a key press would.
    pub fn guess(&self, key: &str) -> Result<(), JsValue> {
        match keyboard::key_from_event(key) {
            Some(key) => self.with(|c| c.guess(key))?,
            None => Ok(()),
        }
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        self.with(Controller::restart)?
    }

    /// `"playing"`, `"won"` or `"lost"`.
    pub fn state(&self) -> Result<String, JsValue> {
        self.with(|c| c.session.state().as_str().to_string())
    }

    pub fn category(&self) -> Result<String, JsValue> {
        self.with(|c| c.session.category().to_string())
    }

    #[wasm_bindgen(js_name = maskedPhrase)]
    pub fn masked_phrase(&self) -> Result<String, JsValue> {
        self.with(|c| c.session.masked(c.reveal_case))
    }

    #[wasm_bindgen(js_name = incorrectGuesses)]
    pub fn incorrect_guesses(&self) -> Result<u8, JsValue> {
        self.with(|c| c.session.incorrect())
    }

    /// Guessed characters, uppercase, in sorted order.
    pub fn guessed(&self) -> Result<String, JsValue> {
        self.with(|c| c.session.guessed().iter().collect())
    }
}
