use leptos::logging::{error, log};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::display;
use crate::error::ReadingsError;
use crate::render::DocumentSlots;
use crate::types::ReadingsPayload;

pub const READINGS_PATH: &str = "/readings";

fn create_request_init(headers: &Headers) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_headers(&JsValue::from(headers));
    opts
}

fn check_status(ok: bool, status: u16) -> Result<(), ReadingsError> {
    if ok {
        Ok(())
    } else {
        Err(ReadingsError::Status(status))
    }
}

/// Fetch the current snapshot from the device.
pub async fn fetch_readings() -> Result<ReadingsPayload, ReadingsError> {
    let window = web_sys::window().ok_or(ReadingsError::NoWindow)?;

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    let opts = create_request_init(&headers);
    let request = Request::new_with_str_and_init(READINGS_PATH, &opts)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    check_status(resp.ok(), resp.status())?;

    let json = JsFuture::from(resp.json()?)
        .await
        .map_err(|e| ReadingsError::Parse(format!("{:?}", e)))?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

async fn load_and_show() -> Result<(), ReadingsError> {
    let payload = fetch_readings().await?;
    log!("{:?}", payload);
    let mut slots = DocumentSlots::from_window()?;
    display::show(&mut slots, &payload)
}

/// Paint the current readings once (fire and forget). No retry, no timeout.
pub fn get_readings() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = load_and_show().await {
            error!("Initial readings failed: {}", e);
        }
    });
}

/// Run `get_readings` once the page has loaded.
pub fn get_readings_on_load() -> Result<(), ReadingsError> {
    let window = web_sys::window().ok_or(ReadingsError::NoWindow)?;
    let document = window.document().ok_or(ReadingsError::NoWindow)?;

    // The module can start after `load` has already fired.
    if document.ready_state() == "complete" {
        get_readings();
        return Ok(());
    }

    let on_load = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| get_readings());
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}
