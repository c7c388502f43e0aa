use dioxus::prelude::*;
use shared_types::Coordinates;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Move the visible map center to `center` at `zoom`, animated over
/// `duration_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub center: Coordinates,
    pub zoom: u8,
    pub duration_secs: f64,
}

impl FlyTo {
    pub fn new(center: Coordinates, zoom: u8, duration_secs: f64) -> Self {
        Self {
            center,
            zoom,
            duration_secs,
        }
    }

    /// JavaScript that flies map `map_id` and drops the focus marker there.
    /// Waits for the map to exist, since Leaflet loads asynchronously.
    pub fn script(&self, map_id: &str) -> String {
        format!(
            "(function fly() {{ \
               const m = window.__dispatchMaps && window.__dispatchMaps[{id}]; \
               if (!m) {{ setTimeout(fly, 50); return; }} \
               m.map.flyTo([{lat}, {lng}], {zoom}, {{ duration: {dur} }}); \
               if (m.marker) {{ m.marker.setLatLng([{lat}, {lng}]); }} \
               else {{ m.marker = L.marker([{lat}, {lng}]).addTo(m.map); }} \
             }})();",
            id = js_string(map_id),
            lat = self.center.latitude,
            lng = self.center.longitude,
            zoom = self.zoom,
            dur = self.duration_secs,
        )
    }
}

/// JavaScript that creates the Leaflet map inside element `map_id`.
pub fn init_script(map_id: &str, center: Coordinates, zoom: u8) -> String {
    format!(
        "(function init() {{ \
           if (!window.L || !document.getElementById({id})) {{ setTimeout(init, 50); return; }} \
           window.__dispatchMaps = window.__dispatchMaps || {{}}; \
           if (window.__dispatchMaps[{id}]) {{ return; }} \
           const map = L.map({id}).setView([{lat}, {lng}], {zoom}); \
           L.tileLayer({tiles}, {{ maxZoom: 19 }}).addTo(map); \
           window.__dispatchMaps[{id}] = {{ map: map, marker: null }}; \
         }})();",
        id = js_string(map_id),
        lat = center.latitude,
        lng = center.longitude,
        zoom = zoom,
        tiles = js_string(TILE_URL),
    )
}

/// JavaScript that tears the map down when its element unmounts.
pub fn teardown_script(map_id: &str) -> String {
    format!(
        "(function() {{ \
           const maps = window.__dispatchMaps; \
           if (maps && maps[{id}]) {{ maps[{id}].map.remove(); delete maps[{id}]; }} \
         }})();",
        id = js_string(map_id),
    )
}

/// Quote a value as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Leaflet map. Changing `fly_to` animates the view to the new target.
#[component]
pub fn MapView(
    id: String,
    center: Coordinates,
    #[props(default = 12)] zoom: u8,
    #[props(default)] fly_to: Option<FlyTo>,
) -> Element {
    let init_id = id.clone();
    let teardown_id = id.clone();

    use_effect(use_reactive!(|(fly_to, id)| {
        if let Some(target) = fly_to {
            let _ = document::eval(&target.script(&id));
        }
    }));

    use_drop(move || {
        let _ = document::eval(&teardown_script(&teardown_id));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        document::Script { src: LEAFLET_JS }
        div {
            id: "{id}",
            class: "map-view",
            onmounted: move |_| {
                let _ = document::eval(&init_script(&init_id, center, zoom));
            },
        }
    }
}
