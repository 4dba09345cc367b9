//! Starry-night backdrop injected into hero sections.

use portfolio_core::starfield::{ConstellationLine, ShootingStar, Star};
use portfolio_core::{Starfield, StarfieldConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::rng::browser_rng;

const HERO_SELECTOR: &str = ".hero, .page-hero";
const CONTAINER_CLASS: &str = "stars-container";

fn div(doc: &Document, class: &str) -> Option<HtmlElement> {
    let el = doc.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
    el.set_class_name(class);
    Some(el)
}

fn styled(el: &HtmlElement, props: &[(&str, String)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

fn star(doc: &Document, star: &Star) -> Option<HtmlElement> {
    let el = div(doc, "star")?;
    styled(
        &el,
        &[
            ("left", format!("{}%", star.left_pct)),
            ("top", format!("{}%", star.top_pct)),
            ("animation-delay", format!("{}s", star.delay_s)),
            ("opacity", star.opacity.to_string()),
        ],
    );
    Some(el)
}

fn shooting_star(doc: &Document, data: &ShootingStar) -> Option<HtmlElement> {
    let el = div(doc, "shooting-star")?;
    styled(
        &el,
        &[
            ("top", data.top.to_string()),
            ("left", data.left.to_string()),
            ("animation-delay", data.delay.to_string()),
            ("animation-duration", data.duration.to_string()),
        ],
    );
    Some(el)
}

fn constellation_line(doc: &Document, line: &ConstellationLine) -> Option<HtmlElement> {
    let el = div(doc, "constellation-line")?;
    styled(
        &el,
        &[
            ("left", format!("{}%", line.left_pct)),
            ("top", format!("{}%", line.top_pct)),
            ("width", format!("{}%", line.length_pct)),
            ("transform", format!("rotate({}deg)", line.angle_deg)),
            ("animation-delay", format!("{}s", line.delay_s)),
        ],
    );
    Some(el)
}

fn build(doc: &Document, field: &Starfield) -> Option<HtmlElement> {
    let container = div(doc, CONTAINER_CLASS)?;
    for layer in &field.layers {
        let layer_el = div(doc, &format!("stars-layer {}", layer.class))?;
        for s in &layer.stars {
            if let Some(el) = star(doc, s) {
                let _ = layer_el.append_child(&el);
            }
        }
        let _ = container.append_child(&layer_el);
    }
    for data in &field.shooting_stars {
        if let Some(el) = shooting_star(doc, data) {
            let _ = container.append_child(&el);
        }
    }
    let constellation = div(doc, "constellation")?;
    for line in &field.constellation {
        if let Some(el) = constellation_line(doc, line) {
            let _ = constellation.append_child(&el);
        }
    }
    let _ = container.append_child(&constellation);
    for class in &field.nebulas {
        if let Some(el) = div(doc, class) {
            let _ = container.append_child(&el);
        }
    }
    Some(container)
}

fn decorate(doc: &Document, hero: &Element) -> bool {
    if dom::query(hero, &format!(".{CONTAINER_CLASS}")).is_some() {
        return false;
    }
    let field = Starfield::generate(&StarfieldConfig::default(), &mut browser_rng());
    build(doc, &field)
        .is_some_and(|container| hero.insert_before(&container, hero.first_child().as_ref()).is_ok())
}

/// Add a starfield to every hero section that lacks one. Returns how many were added.
pub fn init_starry_night() -> usize {
    let Some(doc) = dom::document() else {
        return 0;
    };
    let added = dom::query_all(HERO_SELECTOR)
        .iter()
        .filter(|hero| decorate(&doc, hero))
        .count();
    log::debug!("starry night added to {added} hero section(s)");
    added
}

/// Replace every starfield with a freshly generated one.
pub fn refresh_stars() -> usize {
    for container in dom::query_all(&format!(".{CONTAINER_CLASS}")) {
        container.remove();
    }
    init_starry_night()
}
