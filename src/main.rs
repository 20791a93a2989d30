// main.rs
//
// Minimal example of each sketch primitive of pathplane. The resulting shapes are
// collected in a ShapeStack and written out as the JSON payload consumed by the
// shader generator (`{ "data": ..., "shapes": ... }`).

use nalgebra::Vector2;
use pathplane::float_types::FRAC_PI_2;
use pathplane::{CubicSegment, ShapeStack, SignedDistance, Workplane};
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut stack = ShapeStack::new();

    // 1) straight lines, a tangent arc, a sagitta arc and a spline back home
    let tab = Workplane::new()
        .h_line(4.0)
        .tangent_arc_point(Vector2::new(1.0, 1.0))?
        .v_line(2.0)
        .sagitta_arc_to(0.5, Vector2::new(0.0, 3.0))?
        .spline_to(&[CubicSegment::new(
            Vector2::new(-1.0, 2.0),
            Vector2::new(-1.0, 1.0),
            Vector2::new(0.0, 0.0),
        )])?
        .close();
    log::info!(
        "tab: {} points, area ~ {:.3}",
        tab.points.len(),
        tab.area(32)
    );
    let tab_id = stack.push(tab);

    // 2) polar lines and a radius arc
    let wedge = Workplane::new()
        .polar_line(3.0, 0.0)
        .radius_arc_to(3.0, Vector2::new(0.0, 3.0))?
        .polar_line_to(0.0, FRAC_PI_2)
        .close();
    let wedge_id = stack.push(wedge);

    // 3) a poly-line with a detached start
    let zigzag = Workplane::new()
        .move_to(Vector2::new(-2.0, -2.0))
        .polyline(&[
            Vector2::new(-2.0, -2.0),
            Vector2::new(-1.0, -1.0),
            Vector2::new(0.0, -2.0),
            Vector2::new(1.0, -1.0),
        ])?
        .line_to(Vector2::new(1.0, -3.0))
        .close();
    stack.push(zigzag);

    for (id, shape) in stack.iter() {
        let origin = Vector2::new(0.5, 0.5);
        println!(
            "{:?}: sdf(0.5, 0.5) = {:.4}, contains = {}",
            id,
            shape.signed_distance(&origin),
            shape.contains(&origin)
        );
    }
    println!(
        "{} auxiliary shapes in tab, {} in wedge",
        stack.descriptors(tab_id).map_or(0, |d| d.len()),
        stack.descriptors(wedge_id).map_or(0, |d| d.len())
    );

    let json = stack.to_json()?;
    match std::env::args().nth(1) {
        Some(path) => {
            fs::write(&path, json)?;
            println!("Wrote {} shapes to '{}'.", stack.len(), path);
        },
        None => println!("{}", json),
    }
    Ok(())
}
