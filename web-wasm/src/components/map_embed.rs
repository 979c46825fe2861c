//! `.map`（Mapbox 地図とマーカー）

use crate::bindings::mapbox::{Map, Marker, NavigationControl, Popup};
use crate::error::{Result, WidgetError};
use crate::page::BrowserPage;
use devportal_widgets_common::map::{MapEmbed, POPUP_OFFSET};
use serde::Serialize;
use web_sys::Element;

#[derive(Serialize)]
struct PopupOptions {
    offset: f64,
}

fn to_js<T: Serialize>(value: &T) -> Result<wasm_bindgen::JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| WidgetError::Js(e.to_string()))
}

pub fn init(page: &BrowserPage, element: Element) -> Result<()> {
    let embed = MapEmbed::from_attributes(
        element.get_attribute("data-lat").as_deref(),
        element.get_attribute("data-lng").as_deref(),
        element.get_attribute("data-map-id").as_deref(),
        element.get_attribute("data-venue").as_deref(),
    )?;

    let map = Map::new(&to_js(&embed.options)?)?;
    map.add_control(&NavigationControl::new());

    let marker_element = page.document().create_element("div")?;
    marker_element.set_class_name("marker");

    let popup = Popup::new(&to_js(&PopupOptions {
        offset: POPUP_OFFSET,
    })?);
    popup.set_html(&embed.popup_html());

    Marker::new(&marker_element)
        .set_lng_lat(&to_js(&embed.options.center)?)
        .set_popup(&popup)
        .add_to(&map);

    Ok(())
}
