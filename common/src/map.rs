//! 地図埋め込みの設定
//!
//! `.map` 要素の data属性（lat/lng/map-id/venue）から Mapbox に渡す値を作る。

use crate::error::{Error, Result};
use serde::Serialize;

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v10";
pub const MAP_ZOOM: f64 = 16.0;
pub const POPUP_OFFSET: f64 = 25.0;

/// mapboxgl.Map のコンストラクタ引数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub container: String,
    pub style: String,
    /// [経度, 緯度]
    pub center: [f64; 2],
    pub zoom: f64,
}

/// 1つの地図埋め込み
#[derive(Debug, Clone, PartialEq)]
pub struct MapEmbed {
    pub options: MapOptions,
    pub venue: String,
}

impl MapEmbed {
    /// data属性から組み立てる
    pub fn from_attributes(
        lat: Option<&str>,
        lng: Option<&str>,
        map_id: Option<&str>,
        venue: Option<&str>,
    ) -> Result<Self> {
        let lat = parse_coordinate("data-lat", lat, 90.0)?;
        let lng = parse_coordinate("data-lng", lng, 180.0)?;
        let container = map_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Markup("data-map-id がありません".into()))?;

        Ok(Self {
            options: MapOptions {
                container: container.to_string(),
                style: MAP_STYLE.to_string(),
                center: [lng, lat],
                zoom: MAP_ZOOM,
            },
            venue: venue.unwrap_or_default().to_string(),
        })
    }

    /// マーカーのポップアップHTML
    pub fn popup_html(&self) -> String {
        format!("<p>{}</p>", escape_html(&self.venue))
    }
}

fn parse_coordinate(attr: &str, raw: Option<&str>, limit: f64) -> Result<f64> {
    let raw = raw.ok_or_else(|| Error::Markup(format!("{} がありません", attr)))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Markup(format!("{} が数値ではありません: '{}'", attr, raw)))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(Error::Markup(format!("{} が範囲外です: {}", attr, value)));
    }
    Ok(value)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
