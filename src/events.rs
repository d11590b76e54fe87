use crate::dom;
use crate::keys::{command_for_key, KeyCommand};
use crate::player::PlayerController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn run(player: &PlayerController, cmd: KeyCommand) {
    match cmd {
        KeyCommand::TogglePlay => player.toggle_play(),
        KeyCommand::Next => player.next(),
        KeyCommand::Prev => player.prev(),
        KeyCommand::CycleVolume => player.cycle_volume(),
    }
}

pub fn wire_controls(player: &PlayerController) {
    let controls = player.controls.clone();
    let p = player.clone();
    dom::add_click_listener(&controls.prev, move || p.prev());
    let p = player.clone();
    dom::add_click_listener(&controls.next, move || p.next());
    let p = player.clone();
    dom::add_click_listener(&controls.play, move || p.toggle_play());
    let p = player.clone();
    dom::add_click_listener(&controls.volume, move || p.cycle_volume());
}

pub fn wire_track_ended(player: &PlayerController) {
    let p = player.clone();
    let closure = Closure::wrap(Box::new(move || p.track_ended()) as Box<dyn FnMut()>);
    _ = player
        .audio
        .element
        .add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_global_keydown(player: &PlayerController) {
    let p = player.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(cmd) = command_for_key(&ev.key()) {
            ev.prevent_default();
            run(&p, cmd);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
