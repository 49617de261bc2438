//! DOM and canvas surfaces. Everything here writes to the page; no game rules.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Function;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement};

use super::gallows::{self, BodyPart, Stroke};
use super::keyboard::{self, KeyMark};
use super::session::Session;
use crate::options::{ElementIds, RevealCase};

pub(crate) const KEY_CLASS: &str = "letter-btn";
pub(crate) const KEY_ATTR: &str = "data-key";
const BANNER_CLASS: &str = "game-over-container";

pub(crate) struct Surfaces {
    document: Document,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    word_display: Element,
    category: Element,
    letters: Element,
    status: Element,
    keys: Vec<(char, HtmlButtonElement)>,
    banner: Option<Element>,
}

impl Surfaces {
    /// Look up every surface by id, creating missing ones under `<body>`.
    pub(crate) fn locate(document: Document, ids: &ElementIds) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = match document.get_element_by_id(&ids.canvas) {
            Some(el) => el.dyn_into()?,
            None => {
                let c: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                c.set_id(&ids.canvas);
                c.set_width(gallows::CANVAS_WIDTH);
                c.set_height(gallows::CANVAS_HEIGHT);
                append_to_body(&document, &c)?;
                c
            }
        };
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let word_display = find_or_create(&document, &ids.word_display)?;
        let category = find_or_create(&document, &ids.category)?;
        let letters = find_or_create(&document, &ids.letters)?;
        let status = find_or_create(&document, &ids.status)?;

        Ok(Self {
            document,
            canvas,
            ctx,
            word_display,
            category,
            letters,
            status,
            keys: Vec::new(),
            banner: None,
        })
    }

    pub(crate) fn letters(&self) -> &Element {
        &self.letters
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    // --- Word display ---------------------------------------------------------

    pub(crate) fn render_words(&self, session: &Session, case: RevealCase) -> Result<(), JsValue> {
        self.word_display.set_text_content(None);
        for word in session.words(case) {
            let group = self.document.create_element("div")?;
            group.set_class_name("word");
            for slot in word {
                let span = self.document.create_element("span")?;
                span.set_class_name("letter");
                if let Some(c) = slot {
                    span.set_text_content(Some(&c.to_string()));
                }
                group.append_child(&span)?;
            }
            self.word_display.append_child(&group)?;
        }
        Ok(())
    }

    pub(crate) fn render_category(&self, session: &Session) {
        self.category
            .set_text_content(Some(&format!("Category: {}", session.category())));
    }

    // --- Keyboard -------------------------------------------------------------

    /// Replace the keyboard with fresh, enabled buttons.
    pub(crate) fn render_keyboard(&mut self) -> Result<(), JsValue> {
        self.letters.set_text_content(None);
        self.keys.clear();

        let container = self.document.create_element("div")?;
        container.set_class_name("keyboard-container");
        for (i, section_keys) in keyboard::SECTIONS.iter().enumerate() {
            if i > 0 {
                let divider = self.document.create_element("div")?;
                divider.set_class_name("keyboard-divider");
                container.append_child(&divider)?;
            }
            let section = self.document.create_element("div")?;
            section.set_class_name("keyboard-section");
            for &key in section_keys.iter() {
                let button: HtmlButtonElement = self.document.create_element("button")?.dyn_into()?;
                let label = key.to_string();
                button.set_class_name(KEY_CLASS);
                button.set_text_content(Some(&label));
                button.set_attribute(KEY_ATTR, &label)?;
                section.append_child(&button)?;
                self.keys.push((key, button));
            }
            container.append_child(&section)?;
        }
        self.letters.append_child(&container)?;
        Ok(())
    }

    pub(crate) fn key_button(&self, key: char) -> Option<&HtmlButtonElement> {
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, b)| b)
    }

    /// Disable `key` and tag it with `mark`. Repeating the call is harmless.
    pub(crate) fn mark_key(&self, key: char, mark: KeyMark) -> Result<(), JsValue> {
        if let Some(button) = self.key_button(key) {
            button.set_disabled(true);
            if let Some(class) = mark.class_name() {
                button.class_list().add_1(class)?;
            }
        }
        Ok(())
    }

    pub(crate) fn disable_keys(&self) {
        for (_, button) in &self.keys {
            button.set_disabled(true);
        }
    }

    // --- Gallows --------------------------------------------------------------

    /// Clear the canvas and draw the empty scaffold.
    pub(crate) fn draw_scaffold(&self) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.set_stroke_style_str(gallows::STROKE_COLOR);
        self.ctx.set_line_width(gallows::STROKE_WIDTH);
        for stroke in gallows::SCAFFOLD {
            self.draw_stroke(stroke)?;
        }
        Ok(())
    }

    pub(crate) fn draw_part(&self, part: BodyPart) -> Result<(), JsValue> {
        self.draw_stroke(part.stroke())
    }

    fn draw_stroke(&self, stroke: Stroke) -> Result<(), JsValue> {
        match stroke {
            Stroke::Line { from, to } => line(&self.ctx, from.0, from.1, to.0, to.1),
            Stroke::Circle { center, radius } => {
                self.ctx.begin_path();
                self.ctx
                    .arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU)?;
                self.ctx.stroke();
            }
        }
        Ok(())
    }

    // --- Status ---------------------------------------------------------------

    /// Show the end-of-game message in the status area and in a banner above
    /// the canvas, each with a "Play Again" button wired to `restart`.
    pub(crate) fn render_outcome(
        &mut self,
        message: &str,
        restart: &Function,
    ) -> Result<(), JsValue> {
        self.clear_outcome();

        self.status.set_text_content(Some(message));
        let again = self.restart_button(restart)?;
        self.status.append_child(&again)?;

        let banner = self.document.create_element("div")?;
        banner.set_class_name(BANNER_CLASS);
        let p = self.document.create_element("p")?;
        p.set_text_content(Some(message));
        banner.append_child(&p)?;
        let again = self.restart_button(restart)?;
        banner.append_child(&again)?;
        self.canvas.insert_adjacent_element("beforebegin", &banner)?;
        self.banner = Some(banner);
        Ok(())
    }

    pub(crate) fn clear_outcome(&mut self) {
        self.status.set_text_content(None);
        if let Some(banner) = self.banner.take() {
            banner.remove();
        }
    }

    fn restart_button(&self, restart: &Function) -> Result<Element, JsValue> {
        let button = self.document.create_element("button")?;
        button.set_text_content(Some("Play Again"));
        button.set_class_name("play-again-btn");
        button.add_event_listener_with_callback("click", restart)?;
        Ok(button)
    }
}

fn find_or_create(document: &Document, id: &str) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let div = document.create_element("div")?;
    div.set_id(id);
    append_to_body(document, &div)?;
    Ok(div)
}

fn append_to_body(document: &Document, node: &web_sys::Node) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(node)?;
    Ok(())
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
