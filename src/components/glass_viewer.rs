//! Interactive 3D glass viewer
//!
//! The scene itself (model loading, camera, lights) lives in a small
//! `window.GlassViewer` helper; this component owns the animation: a
//! requestAnimationFrame loop computes the idle float, yaw, and spring
//! scale each frame and pushes the resulting transform into the scene.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::animation::{float_offset, mount_scale, yaw_rate, Spring};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "GlassViewer"])]
    fn init(canvas_id: &str, model_url: &str, opacity: f64);

    #[wasm_bindgen(js_namespace = ["window", "GlassViewer"], js_name = setTransform)]
    fn set_transform(canvas_id: &str, x: f64, y: f64, z: f64, yaw: f64, scale: f64);

    #[wasm_bindgen(js_namespace = ["window", "GlassViewer"], js_name = setLightIntensity)]
    fn set_light_intensity(canvas_id: &str, intensity: f64);

    #[wasm_bindgen(js_namespace = ["window", "GlassViewer"])]
    fn destroy(canvas_id: &str);
}

/// Every material in the model is forced translucent at this alpha.
const MATERIAL_OPACITY: f64 = 0.5;
/// Base height the floating motion oscillates around.
const BASE_HEIGHT: f64 = -2.0;
const RESTING_SCALE: f64 = 0.80;
const HOVER_SCALE: f64 = 0.82;
/// Duration of the mount-in scale ease, seconds.
const MOUNT_SECS: f64 = 0.6;
const IDLE_LIGHT: f64 = 2.0;
const HOVER_LIGHT: f64 = 3.0;

#[component]
pub fn GlassViewer(
    /// Path to the 3D model asset.
    model_url: String,
    #[prop(default = "glass-canvas".to_string())]
    canvas_id: String,
) -> impl IntoView {
    let hovered = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(None::<i32>));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let loop_id = canvas_id.clone();
    let loop_model = model_url.clone();
    let hovered_loop = hovered.clone();
    let raf_id_loop = raf_id.clone();
    let frame_slot = frame.clone();
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        init(&loop_id, &loop_model, MATERIAL_OPACITY);

        let start = Cell::new(None::<f64>);
        let last = Cell::new(0.0_f64);
        let yaw = Cell::new(0.0_f64);
        let spring = RefCell::new(Spring::wobbly(RESTING_SCALE));

        let id = loop_id.clone();
        let hovered = hovered_loop.clone();
        let raf_id = raf_id_loop.clone();
        let frame_inner = frame_slot.clone();
        let closure = Closure::new(move |timestamp: f64| {
            let t0 = match start.get() {
                Some(t0) => t0,
                None => {
                    start.set(Some(timestamp));
                    last.set(timestamp);
                    timestamp
                }
            };
            let elapsed = (timestamp - t0) / 1000.0;
            let dt = ((timestamp - last.get()) / 1000.0).clamp(0.0, 0.05);
            last.set(timestamp);

            yaw.set(yaw.get() + yaw_rate(hovered.get()));
            let (fx, fy, fz) = float_offset(elapsed);

            // The mount ease runs to completion regardless of hover; the
            // spring takes over afterwards.
            let scale = if elapsed < MOUNT_SECS {
                mount_scale(elapsed, MOUNT_SECS, RESTING_SCALE)
            } else {
                let target = if hovered.get() { HOVER_SCALE } else { RESTING_SCALE };
                spring.borrow_mut().step(target, dt)
            };

            set_transform(&id, fx, BASE_HEIGHT + fy, fz, yaw.get(), scale);
            set_light_intensity(&id, if hovered.get() { HOVER_LIGHT } else { IDLE_LIGHT });

            if let Some(window) = web_sys::window() {
                if let Some(ref frame) = *frame_inner.borrow() {
                    let id = window
                        .request_animation_frame(frame.as_ref().unchecked_ref())
                        .ok();
                    raf_id.set(id);
                }
            }
        });

        *frame_slot.borrow_mut() = Some(closure);
        if let Some(ref frame) = *frame_slot.borrow() {
            let id = window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .ok();
            raf_id_loop.set(id);
        }
    });

    let cleanup_id = canvas_id.clone();
    let raf_id = StoredValue::new_local(raf_id);
    let frame = StoredValue::new_local(frame);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            if let Some(id) = raf_id.with_value(|raf_id| raf_id.get()) {
                let _ = window.cancel_animation_frame(id);
            }
        }
        frame.with_value(|frame| {
            frame.borrow_mut().take();
        });
        destroy(&cleanup_id);
    });

    let hovered_enter = hovered.clone();
    let hovered_leave = hovered;
    view! {
        <div
            class="glass-viewer"
            on:mouseenter=move |_| hovered_enter.set(true)
            on:mouseleave=move |_| hovered_leave.set(false)
        >
            <canvas id=canvas_id class="glass-canvas"></canvas>
        </div>
    }
}
