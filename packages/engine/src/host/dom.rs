use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, MouseEvent, Window};

use crate::core::random::{entropy_seed, seeded};
use crate::domain::{StageConfig, StageError};
use crate::simulation::{RenderSurface, StageCore};

use super::canvas::CanvasSurface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Shared {
    core: StageCore,
    last_frame_ms: Option<f64>,
    raf_id: Option<i32>,
}

/// Listeners and the frame loop of a running stage
struct Runtime {
    window: Window,
    frame: FrameCallback,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

/// Handle returned by `mount_stage`; keep it alive for as long as the overlay
/// should run and call `teardown()` on unmount.
#[wasm_bindgen]
pub struct StageHandle {
    shared: Rc<RefCell<Shared>>,
    runtime: Option<Runtime>,
}

/// Mount the decorative stage into the element with id `container_id`.
///
/// Never throws: if the canvas cannot be created the returned handle is inert
/// and the cause goes to the console.
#[wasm_bindgen]
pub fn mount_stage(container_id: &str) -> StageHandle {
    mount(container_id, StageConfig::default())
}

/// Like `mount_stage` with a JSON config overlay. Only a bad config throws.
#[wasm_bindgen]
pub fn mount_stage_with_config(container_id: &str, config_json: &str) -> Result<StageHandle, JsValue> {
    let config = StageConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(mount(container_id, config))
}

fn mount(container_id: &str, mut config: StageConfig) -> StageHandle {
    let window = web_sys::window();
    if let Some((width, height)) = window.as_ref().and_then(viewport_size) {
        config.viewport.width = width;
        config.viewport.height = height;
    }

    let surface = window
        .as_ref()
        .ok_or_else(|| StageError::MissingMountPoint("no window".into()))
        .and_then(|w| w.document().ok_or_else(|| StageError::MissingMountPoint("no document".into())))
        .and_then(|doc| CanvasSurface::create(&doc, container_id))
        .map(|canvas| Box::new(canvas) as Box<dyn RenderSurface>);

    let core = StageCore::new(config, seeded(entropy_seed()), surface);
    let alive = core.is_alive();
    let shared = Rc::new(RefCell::new(Shared { core, last_frame_ms: None, raf_id: None }));

    let runtime = match window {
        Some(window) if alive => match start(window, &shared) {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                console_warn!("celebration stage could not start its loop: {:?}", e);
                shared.borrow_mut().core.teardown();
                None
            }
        },
        _ => None,
    };

    StageHandle { shared, runtime }
}

fn viewport_size(window: &Window) -> Option<(f32, f32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn start(window: Window, shared: &Rc<RefCell<Shared>>) -> Result<Runtime, JsValue> {
    let mut runtime = Runtime {
        window,
        frame: Rc::new(RefCell::new(None)),
        listeners: Vec::with_capacity(5),
    };
    match wire(&mut runtime, shared) {
        Ok(()) => Ok(runtime),
        Err(e) => {
            runtime.stop();
            Err(e)
        }
    }
}

fn wire(runtime: &mut Runtime, shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    let window = runtime.window.clone();

    // === LISTENERS === (only enqueue; the frame callback does the work)
    let s = shared.clone();
    let w = window.clone();
    runtime.listen("resize", false, move |_| {
        if let Some((width, height)) = viewport_size(&w) {
            s.borrow_mut().core.resize(width, height);
        }
    })?;

    let s = shared.clone();
    runtime.listen("scroll", true, move |_| s.borrow_mut().core.scroll())?;

    let s = shared.clone();
    runtime.listen("mousedown", true, move |e| {
        if let Some(m) = e.dyn_ref::<MouseEvent>() {
            s.borrow_mut().core.pointer_down(m.client_x() as f32, m.client_y() as f32);
        }
    })?;

    let s = shared.clone();
    runtime.listen("mousemove", true, move |e| {
        if let Some(m) = e.dyn_ref::<MouseEvent>() {
            s.borrow_mut().core.pointer_move(m.client_x() as f32, m.client_y() as f32);
        }
    })?;

    let s = shared.clone();
    runtime.listen("mouseup", true, move |_| s.borrow_mut().core.pointer_up())?;

    // === FRAME LOOP ===
    let s = shared.clone();
    let w = window.clone();
    let next = runtime.frame.clone();
    *runtime.frame.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let mut shared = s.borrow_mut();
        shared.raf_id = None;
        if !shared.core.is_alive() {
            return;
        }
        let elapsed = shared.last_frame_ms.map_or(0.0, |last| now_ms - last);
        shared.last_frame_ms = Some(now_ms);
        shared.core.advance(elapsed);

        if let Some(cb) = next.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => shared.raf_id = Some(id),
                Err(e) => console_warn!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }));

    let id = match runtime.frame.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
        None => return Err(JsValue::from_str("frame callback missing")),
    };
    shared.borrow_mut().raf_id = Some(id);
    Ok(())
}

impl Runtime {
    fn listen<F>(&mut self, name: &'static str, passive: bool, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        self.window.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push((name, closure));
        Ok(())
    }

    /// Detach listeners and break the frame callback's self-reference
    fn stop(self) {
        for (name, closure) in &self.listeners {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                console_warn!("failed to detach {} listener: {:?}", name, e);
            }
        }
        self.frame.borrow_mut().take();
    }
}

/// Freeing the handle from JS without `teardown()` must still detach the
/// listeners before their closures go away
impl Drop for StageHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[wasm_bindgen]
impl StageHandle {
    /// Stop the loop, detach listeners and remove the canvas.
    /// Returns false if already torn down (or never started).
    pub fn teardown(&mut self) -> bool {
        let Some(runtime) = self.runtime.take() else {
            return false;
        };
        let raf_id = self.shared.borrow_mut().raf_id.take();
        if let Some(id) = raf_id {
            if let Err(e) = runtime.window.cancel_animation_frame(id) {
                console_warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        // Flip the stage first so a callback already in flight does nothing
        let released = self.shared.borrow_mut().core.teardown();
        runtime.stop();
        released
    }

    #[wasm_bindgen(getter)]
    pub fn is_alive(&self) -> bool {
        self.shared.borrow().core.is_alive()
    }

    #[wasm_bindgen(getter)]
    pub fn is_inert(&self) -> bool {
        self.shared.borrow().core.is_inert()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.shared.borrow().core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.shared.borrow().core.frame()
    }
}
