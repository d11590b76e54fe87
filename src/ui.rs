use crate::dom;
use player_core::{PlayerState, PAUSE_ICON_CLASS, PLAY_ICON_CLASS, VOLUME_ICON_CLASSES};
use web_sys as web;

/// DOM handles the player updates. Element ids follow the page markup.
pub struct Controls {
    pub prev: web::Element,
    pub next: web::Element,
    pub play: web::Element,
    pub volume: web::Element,
    background: web::Element,
    title: web::Element,
}

impl Controls {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            prev: dom::element_by_id(document, "btn-prev")?,
            next: dom::element_by_id(document, "btn-next")?,
            play: dom::element_by_id(document, "btn-play")?,
            volume: dom::element_by_id(document, "btn-volume")?,
            background: dom::element_by_id(document, "background")?,
            title: dom::element_by_id(document, "title")?,
        })
    }

    /// Mirror loading, play and volume state onto classes, icons and the title.
    pub fn reflect(&self, state: &PlayerState) {
        let loading = !state.controls_enabled();
        dom::set_class(&self.background, "loading", loading);
        for button in [&self.prev, &self.next, &self.play] {
            dom::set_class(button, "disabled", loading);
        }
        dom::set_icon(
            &self.play,
            &[PLAY_ICON_CLASS, PAUSE_ICON_CLASS],
            state.play_icon_class(),
        );
        dom::set_icon(&self.volume, &VOLUME_ICON_CLASSES, state.volume().icon_class());
        if state.is_ready() {
            self.title.set_text_content(Some(&state.current_track().title));
        }
    }
}
