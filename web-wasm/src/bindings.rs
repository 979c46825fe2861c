//! ページに読み込まれている外部JSライブラリのextern宣言
//!
//! - `mapboxgl`（Mapbox GL JS）
//! - `Mzp.Modal`（Mozilla Protocol）

use wasm_bindgen::prelude::*;
use web_sys::Element;

pub mod mapbox {
    use super::*;

    #[wasm_bindgen]
    extern "C" {
        /// mapboxgl.Map
        #[wasm_bindgen(js_namespace = mapboxgl)]
        pub type Map;

        /// `new mapboxgl.Map(options)`。ライブラリ未読み込みなら例外
        #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
        pub fn new(options: &JsValue) -> Result<Map, JsValue>;

        #[wasm_bindgen(method, js_name = addControl)]
        pub fn add_control(this: &Map, control: &NavigationControl);
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = mapboxgl)]
        pub type NavigationControl;

        #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
        pub fn new() -> NavigationControl;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = mapboxgl)]
        pub type Marker;

        /// カスタム要素をマーカーとして使う
        #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
        pub fn new(element: &Element) -> Marker;

        /// [経度, 緯度]
        #[wasm_bindgen(method, js_name = setLngLat)]
        pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = setPopup)]
        pub fn set_popup(this: &Marker, popup: &Popup) -> Marker;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &Marker, map: &Map) -> Marker;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = mapboxgl)]
        pub type Popup;

        #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
        pub fn new(options: &JsValue) -> Popup;

        #[wasm_bindgen(method, js_name = setHTML)]
        pub fn set_html(this: &Popup, html: &str) -> Popup;
    }
}

#[wasm_bindgen]
extern "C" {
    /// `Mzp.Modal.createModal(origin, content, options)`
    ///
    /// # Arguments
    /// * `origin` - モーダルのルート要素
    /// * `content` - 表示する中身
    /// * `options` - className / closeText / title / onCreate / onDestroy
    #[wasm_bindgen(js_namespace = ["Mzp", "Modal"], js_name = createModal, catch)]
    pub fn create_modal(
        origin: &Element,
        content: &Element,
        options: &JsValue,
    ) -> Result<(), JsValue>;
}
