use crate::error::ReadingsError;
use crate::types::Reading;

pub const TITLE_PREFIX: &str = "sessionTitleArray";
pub const DATE_PREFIX: &str = "sessionDateArray";
pub const TIME_PREFIX: &str = "sessionTimeArray";
pub const CATEGORY_PREFIX: &str = "sessionCategory";
pub const PERCENTAGE_PREFIX: &str = "sessionPercentageArray";

/// Somewhere to paint text by element id. The page markup owns the
/// elements; painting never creates one.
pub trait Slots {
    fn paint(&mut self, id: &str, html: &str) -> Result<(), ReadingsError>;
}

/// The live page.
pub struct DocumentSlots {
    document: web_sys::Document,
}

impl DocumentSlots {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, ReadingsError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ReadingsError::NoWindow)?;
        Ok(Self::new(document))
    }
}

impl Slots for DocumentSlots {
    fn paint(&mut self, id: &str, html: &str) -> Result<(), ReadingsError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ReadingsError::MissingSlot(id.to_string()))?;
        element.set_inner_html(html);
        Ok(())
    }
}

/// Ids and contents of the five slots for the reading at `index`.
pub fn slot_fields(index: usize, reading: &Reading) -> [(String, &str); 5] {
    [
        (format!("{}{}", TITLE_PREFIX, index), reading.title.as_str()),
        (format!("{}{}", DATE_PREFIX, index), reading.date.as_str()),
        (format!("{}{}", TIME_PREFIX, index), reading.time.as_str()),
        (format!("{}{}", CATEGORY_PREFIX, index), reading.category.as_str()),
        (format!("{}{}", PERCENTAGE_PREFIX, index), reading.percentage.as_str()),
    ]
}

/// Paint reading i into slot set i. Stops at the first missing element;
/// slots painted before it keep their new content.
pub fn render_readings<S: Slots + ?Sized>(slots: &mut S, readings: &[Reading]) -> Result<(), ReadingsError> {
    for (i, reading) in readings.iter().enumerate() {
        for (id, html) in slot_fields(i, reading) {
            slots.paint(&id, html)?;
        }
    }
    Ok(())
}
