use player_core::{SpectrumSource, FFT_SIZE};
use std::cell::RefCell;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// media element -> gain -> analyser -> destination
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub element: web::HtmlAudioElement,
    pub gain: web::GainNode,
    pub analyser: web::AnalyserNode,
    object_url: RefCell<Option<String>>,
}

fn js_err(label: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{} error: {:?}", label, e)
}

pub fn build_graph(element: web::HtmlAudioElement, volume: f32) -> anyhow::Result<AudioGraph> {
    let ctx = web::AudioContext::new().map_err(|e| js_err("AudioContext", e))?;
    let source = ctx
        .create_media_element_source(&element)
        .map_err(|e| js_err("MediaElementSource", e))?;
    let gain = web::GainNode::new(&ctx).map_err(|e| js_err("GainNode", e))?;
    gain.gain().set_value(volume);
    let analyser = web::AnalyserNode::new(&ctx).map_err(|e| js_err("AnalyserNode", e))?;
    analyser.set_fft_size(FFT_SIZE);

    source
        .connect_with_audio_node(&gain)
        .map_err(|e| js_err("connect source", e))?;
    gain.connect_with_audio_node(&analyser)
        .map_err(|e| js_err("connect gain", e))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| js_err("connect analyser", e))?;

    log::info!(
        "[audio] graph ready, {} frequency bins",
        analyser.frequency_bin_count()
    );
    Ok(AudioGraph {
        ctx,
        element,
        gain,
        analyser,
        object_url: RefCell::new(None),
    })
}

impl AudioGraph {
    pub fn set_volume(&self, volume: f32) {
        self.gain.gain().set_value(volume);
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    /// Point the media element at freshly fetched bytes. The previous object
    /// URL is released.
    pub fn swap_source(&self, blob: &web::Blob) -> anyhow::Result<()> {
        let url = web::Url::create_object_url_with_blob(blob).map_err(|e| js_err("object URL", e))?;
        self.element.set_src(&url);
        if let Some(old) = self.object_url.borrow_mut().replace(url) {
            _ = web::Url::revoke_object_url(&old);
        }
        Ok(())
    }

    /// Start playback. `on_reject` runs if the browser refuses, e.g. autoplay
    /// blocked before any user gesture.
    pub fn play(&self, on_reject: impl FnOnce() + 'static) {
        self.resume();
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] play rejected: {:?}", e);
                    on_reject();
                }
            }),
            Err(e) => {
                log::error!("[audio] play error: {:?}", e);
                on_reject();
            }
        }
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::error!("[audio] pause error: {:?}", e);
        }
    }

    pub fn rewind(&self) {
        self.element.set_current_time(0.0);
        self.pause();
    }

    pub fn spectrum(&self) -> AnalyserSpectrum {
        AnalyserSpectrum {
            analyser: self.analyser.clone(),
        }
    }
}

/// Byte frequency data straight from the analyser node.
pub struct AnalyserSpectrum {
    analyser: web::AnalyserNode,
}

impl SpectrumSource for AnalyserSpectrum {
    fn read_bytes(&mut self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}
