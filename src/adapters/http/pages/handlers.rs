//! HTTP handlers for HTML pages.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("index.html");

/// Static link panel for exploring the simulation endpoints by hand.
pub const TEST_PANEL_HTML: &str = r#"
<h2>TrafficMind – Test Panel</h2>

<p><a href='/simulate_traffic/2'>🚦 Simulate Heavy Traffic (2 km)</a></p>
<p><a href='/simulate_traffic/0.5'>🚗 Simulate Low Traffic (0.5 km)</a></p>

<p><a href='/simulate_emergency/Ambulance'>🚑 Emergency: Ambulance</a></p>
<p><a href='/simulate_emergency/FireTruck'>🚒 Emergency: Fire Truck</a></p>

<p><a href='/simulate_incident/Accident'>⚠️ Incident: Accident</a></p>
"#;

/// GET / - Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /test - Test panel
pub async fn test_panel() -> Html<&'static str> {
    Html(TEST_PANEL_HTML)
}
