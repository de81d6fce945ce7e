mod clock;
mod display;
mod error;
mod events;
mod loader;
mod render;
mod types;

pub use clock::{format_update_time, update_date_time, UPDATE_TIME_ID};
pub use display::show;
pub use error::ReadingsError;
pub use events::{handle_new_readings, listen, EVENTS_PATH};
pub use loader::{fetch_readings, get_readings, READINGS_PATH};
pub use render::{render_readings, slot_fields, DocumentSlots, Slots};
pub use types::{Reading, ReadingsPayload};

use leptos::logging::error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Snapshot once the page is up, then follow the stream.
    if let Err(e) = loader::get_readings_on_load() {
        error!("Could not schedule initial readings: {}", e);
    }
    if let Err(e) = events::listen() {
        error!("Could not open event stream: {}", e);
    }
}
