// Static loyalty program page

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, text_element, ElementBuilder};
use crate::models::loyalty::{LoyaltyTier, PROGRAM_DESCRIPTION, PROGRAM_TITLE, TIERS};

pub fn render_loyalty() -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("loyalty-program")
        .child(text_element("h1", "loyalty-title", PROGRAM_TITLE)?)?
        .child(text_element("p", "loyalty-description", PROGRAM_DESCRIPTION)?)?
        .build();

    let tiers = ElementBuilder::new("div")?.class("loyalty-tiers").build();
    for tier in TIERS.iter() {
        append_child(&tiers, &render_tier(tier)?)?;
    }
    append_child(&page, &tiers)?;
    Ok(page)
}

fn render_tier(tier: &LoyaltyTier) -> Result<Element, JsValue> {
    let benefits = ElementBuilder::new("ul")?.class("tier-benefits").build();
    for benefit in tier.benefits {
        append_child(&benefits, &text_element("li", "tier-benefit", benefit)?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class(&format!("tier-card {}", tier.css_class))
        .child(text_element("h2", "tier-name", tier.name)?)?
        .child(text_element("p", "tier-requirement", &tier.requirement_label())?)?
        .child(benefits)?
        .build())
}
