#![cfg(target_arch = "wasm32")]
use player_core::{
    seed_from_halves, PlayerConfig, PlayerState, SilentSpectrum, SpectrumSource, Visualizer,
    VisualizerParams,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod keys;
mod loader;
mod player;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Audio graph, transport state and DOM controls. Returns the analyser view
/// the frame loop reads from.
fn build_player(document: &web::Document) -> anyhow::Result<Box<dyn SpectrumSource>> {
    let config = PlayerConfig::default();
    let state = PlayerState::from_config(&config)?;
    let element = dom::element_by_id(document, "audio")?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let graph = audio::build_graph(element, state.volume().gain())?;
    let controls = ui::Controls::find(document)?;

    let player = player::PlayerController {
        state: Rc::new(RefCell::new(state)),
        audio: Rc::new(graph),
        controls: Rc::new(controls),
    };
    events::wire_controls(&player);
    events::wire_track_ended(&player);
    events::wire_global_keydown(&player);
    player.load_current();

    Ok(Box::new(player.audio.spectrum()))
}

#[inline]
fn random_u32() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("player-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "app-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // A broken audio setup still leaves the particles animating on silence
    let spectrum: Box<dyn SpectrumSource> = match build_player(&document) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[audio] player unavailable: {:?}", e);
            Box::new(SilentSpectrum)
        }
    };

    let params = VisualizerParams {
        seed: seed_from_halves(random_u32(), random_u32()),
        ..VisualizerParams::default()
    };
    let visualizer = Visualizer::new(&params, frame::canvas_dimensions(&canvas));
    let renderer = render::CanvasRenderer::new(&canvas)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        visualizer,
        spectrum,
        renderer,
        canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
