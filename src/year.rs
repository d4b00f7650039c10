use crate::dom::element_by_id;
use crate::imports::*;

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Writes the current year into the year element, once.
///
/// Returns the year written, or `None` when the page has no such element.
pub fn stamp(document: &Document, config: &PageConfig) -> Result<Option<u32>> {
    let Some(target) = element_by_id::<Element>(document, &config.year_id)? else {
        console::warn!(format!("#{} not found, year not stamped", config.year_id));
        return Ok(None);
    };

    let year = current_year();
    target.set_text_content(Some(&year.to_string()));
    Ok(Some(year))
}
