use crate::render::CanvasRenderer;
use player_core::{Dimensions, SpectrumSource, Visualizer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation loop touches: the canvas, the analyser view and
/// the particle visualizer. Playback state stays outside.
pub struct FrameContext {
    pub visualizer: Visualizer,
    pub spectrum: Box<dyn SpectrumSource>,
    pub renderer: CanvasRenderer,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let dims = canvas_dimensions(&self.canvas);
        self.visualizer.set_dimensions(dims);
        self.visualizer.advance_frame(self.spectrum.as_mut());
        self.renderer.draw(self.visualizer.field(), dims);
    }
}

#[inline]
pub fn canvas_dimensions(canvas: &web::HtmlCanvasElement) -> Dimensions {
    Dimensions::new(canvas.width() as f32, canvas.height() as f32)
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
