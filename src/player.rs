use crate::audio::AudioGraph;
use crate::loader;
use crate::ui::Controls;
use player_core::{LoadTicket, PlayAction, PlayerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Glue between transport state, the audio graph and the DOM controls.
/// Cloning shares the same underlying state.
#[derive(Clone)]
pub struct PlayerController {
    pub state: Rc<RefCell<PlayerState>>,
    pub audio: Rc<AudioGraph>,
    pub controls: Rc<Controls>,
}

impl PlayerController {
    fn refresh(&self) {
        self.controls.reflect(&self.state.borrow());
    }

    pub fn load_current(&self) {
        let ticket = self.state.borrow_mut().begin_load();
        self.fetch(ticket);
    }

    pub fn next(&self) {
        self.audio.resume();
        let ticket = self.state.borrow_mut().next_track();
        self.fetch(ticket);
    }

    pub fn prev(&self) {
        self.audio.resume();
        let ticket = self.state.borrow_mut().prev_track();
        self.fetch(ticket);
    }

    pub fn track_ended(&self) {
        self.audio.rewind();
        let ticket = self.state.borrow_mut().track_ended();
        self.fetch(ticket);
    }

    pub fn toggle_play(&self) {
        let action = self.state.borrow_mut().toggle_play();
        match action {
            Some(PlayAction::Play) => self.start_playback(),
            Some(PlayAction::Pause) => self.audio.pause(),
            None => return,
        }
        self.refresh();
    }

    /// Play, and fall back to the paused state if the browser refuses.
    fn start_playback(&self) {
        let generation = self.state.borrow().load_generation();
        let this = self.clone();
        self.audio.play(move || {
            if this.state.borrow_mut().playback_rejected(generation) {
                this.refresh();
            }
        });
    }

    pub fn cycle_volume(&self) {
        let level = self.state.borrow_mut().cycle_volume();
        self.audio.set_volume(level.gain());
        self.refresh();
    }

    fn fetch(&self, ticket: LoadTicket) {
        self.refresh();
        let this = self.clone();
        spawn_local(async move {
            let result = loader::fetch_blob(&ticket.url).await;
            this.finish(ticket, result);
        });
    }

    fn finish(&self, ticket: LoadTicket, result: anyhow::Result<web_sys::Blob>) {
        match result {
            Ok(blob) => {
                if !self.state.borrow_mut().complete_load(&ticket) {
                    return;
                }
                log::info!(
                    "[player] track {} loaded in {} ms",
                    ticket.track_index,
                    ticket.elapsed().as_millis()
                );
                match self.audio.swap_source(&blob) {
                    Ok(()) => self.start_playback(),
                    Err(e) => {
                        log::error!("[player] {:?}", e);
                        self.state.borrow_mut().fail_load(&ticket);
                    }
                }
            }
            Err(e) => {
                if self.state.borrow_mut().fail_load(&ticket) {
                    log::error!("[player] load failed: {:?}", e);
                } else {
                    log::debug!("[player] stale load failed: {:?}", e);
                }
            }
        }
        self.refresh();
    }
}
