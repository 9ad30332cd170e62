// ============================================================================
// ELEMENT HELPERS - Lookup + small mutations
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Plain text only; markup in `text` is never parsed
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Swap `old` for `new` in place
pub fn replace_element(old: &Element, new: &Element) -> Result<(), JsValue> {
    let parent = old
        .parent_node()
        .ok_or_else(|| JsValue::from_str("Element has no parent"))?;
    parent.replace_child(new, old).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Current value of a `<select>` element
pub fn select_value(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
}
