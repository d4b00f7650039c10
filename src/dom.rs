use crate::imports::*;

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn get_document(window: &Window) -> Result<Document> {
    window.document().ok_or(PageError::NoDocument)
}

/// Looks up `#id` and casts it to `T`.
///
/// An absent element is `Ok(None)`; an element of another type is an error.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };

    element
        .dyn_into::<T>()
        .map(Some)
        .map_err(|_| PageError::WrongElement {
            id: id.to_owned(),
            expected: std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("element"),
        })
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
