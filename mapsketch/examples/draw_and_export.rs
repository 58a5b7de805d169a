//! Simulates a short drawing session and prints the exported GeoJSON
//! document.
//!
//! Run with `cargo run --example draw_and_export`. Set `RUST_LOG=debug` to
//! see the state machine and store transitions.

use mapsketch::control::{DrawMode, DrawingController, PointerEvent};
use mapsketch::export;
use mapsketch::mapsketch_types::latlon;
use mapsketch::store::FeatureStore;

fn main() {
    env_logger::init();

    let mut store = FeatureStore::new();
    let mut controller = DrawingController::new();

    // A triangle over lower Manhattan, finished with a double click.
    controller.select_tool(Some(DrawMode::Polygon), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.700, -74.020)), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.700, -73.990)), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.720, -74.005)), &mut store);
    controller.handle_event(&PointerEvent::DoubleClick, &mut store);

    // A rectangle overlapping the triangle's corner; the overlap is trimmed
    // away before the rectangle is committed.
    controller.select_tool(Some(DrawMode::Rectangle), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.695, -74.030)), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.705, -74.010)), &mut store);

    // A circle with the radius given by the second click.
    controller.select_tool(Some(DrawMode::Circle), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.730, -73.980)), &mut store);
    controller.handle_event(&PointerEvent::Down(latlon!(40.735, -73.980)), &mut store);

    if let Some(error) = store.error() {
        eprintln!("last action failed: {error}");
    }

    match export::export_string(&store) {
        Ok(document) => println!("{document}"),
        Err(error) => eprintln!("export failed: {error}"),
    }
}
