use chrono::NaiveDateTime;
use leptos::logging::{error, log, warn};
use wasm_bindgen::prelude::*;
use web_sys::{EventSource, MessageEvent};

use crate::clock;
use crate::display;
use crate::error::ReadingsError;
use crate::render::{DocumentSlots, Slots};
use crate::types::ReadingsPayload;

pub const EVENTS_PATH: &str = "/events";
pub const NEW_READINGS_EVENT: &str = "new_readings";

/// Parse one `new_readings` event body and paint it.
pub fn handle_new_readings<S: Slots + ?Sized>(slots: &mut S, data: &str) -> Result<(), ReadingsError> {
    handle_new_readings_at(slots, data, clock::local_now)
}

pub(crate) fn handle_new_readings_at<S, F>(slots: &mut S, data: &str, now: F) -> Result<(), ReadingsError>
where
    S: Slots + ?Sized,
    F: FnOnce() -> Option<NaiveDateTime>,
{
    let payload = ReadingsPayload::from_json(data)?;
    display::show_at(slots, &payload, now)
}

fn supports_event_source(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("EventSource")).unwrap_or(false)
}

fn on_message(event: MessageEvent) {
    let data = event.data().as_string().unwrap_or_default();
    log!("{} (id {}) {}", NEW_READINGS_EVENT, event.last_event_id(), data);

    let result = DocumentSlots::from_window().and_then(|mut slots| handle_new_readings(&mut slots, &data));
    if let Err(e) = result {
        error!("Failed to apply {}: {}", NEW_READINGS_EVENT, e);
    }
}

/// `None` when the error did not come from an `EventSource`.
fn disconnected(ready_state: Option<u16>) -> bool {
    ready_state != Some(EventSource::OPEN)
}

fn on_error(event: web_sys::Event) {
    let ready_state = event
        .target()
        .and_then(|t| t.dyn_into::<EventSource>().ok())
        .map(|source| source.ready_state());
    if disconnected(ready_state) {
        log!("Events Disconnected");
    }
}

/// Follow the device's event stream for the lifetime of the page.
/// Browsers without `EventSource` get the initial snapshot only.
pub fn listen() -> Result<(), ReadingsError> {
    let window = web_sys::window().ok_or(ReadingsError::NoWindow)?;
    if !supports_event_source(&window) {
        warn!("EventSource unsupported; live updates disabled");
        return Ok(());
    }

    let source = EventSource::new(EVENTS_PATH)?;

    let on_open = Closure::<dyn FnMut(web_sys::Event)>::new(|_: web_sys::Event| log!("Events Connected"));
    source.add_event_listener_with_callback("open", on_open.as_ref().unchecked_ref())?;
    on_open.forget();

    let on_lost = Closure::<dyn FnMut(web_sys::Event)>::new(on_error);
    source.add_event_listener_with_callback("error", on_lost.as_ref().unchecked_ref())?;
    on_lost.forget();

    let on_readings = Closure::<dyn FnMut(MessageEvent)>::new(on_message);
    source.add_event_listener_with_callback(NEW_READINGS_EVENT, on_readings.as_ref().unchecked_ref())?;
    on_readings.forget();

    Ok(())
}
