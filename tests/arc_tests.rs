mod support;

use pathplane::{SignedDistance, SketchError, Workplane, float_types::Real};
use support::{approx_eq, v, vec_approx_eq};

const EPS: Real = 1e-9;

#[test]
fn sagitta_arc_semicircle() {
    let wp = Workplane::new().sagitta_arc_to(1.0, v(2.0, 0.0)).unwrap();
    assert_eq!(wp.position, v(2.0, 0.0));
    assert_eq!(wp.points, vec![v(0.0, 0.0), v(2.0, 0.0)]);
    // chord direction, not the true end tangent
    assert_eq!(wp.tangent_normal, v(1.0, 0.0));

    assert_eq!(wp.auxiliary_shapes.len(), 1);
    let arc = wp.auxiliary_shapes[0];
    assert!(approx_eq(arc.radius, 1.0, EPS));
    assert!(vec_approx_eq(arc.center, v(1.0, 0.0), EPS));
    assert!(approx_eq(arc.half_plane_offset, 0.0, EPS));
    assert!(vec_approx_eq(arc.half_plane_normal, v(0.0, -1.0), EPS));
    assert!(approx_eq(arc.sagitta(), 1.0, EPS));

    // bulge lies to the right of the direction of travel
    assert!(arc.is_on_boundary(&v(1.0, -1.0)));
    assert!(arc.contains(&v(1.0, -0.5)));
    assert!(!arc.contains(&v(1.0, 0.5)));
}

#[test]
fn sagitta_arc_circle_passes_through_both_ends() {
    let start = v(1.0, 1.0);
    let end = v(4.0, -2.0);
    let wp = Workplane::new()
        .move_to(start)
        .sagitta_arc_to(0.3, end)
        .unwrap();
    let arc = wp.auxiliary_shapes[0];
    assert!(approx_eq((start - arc.center).norm(), arc.radius, EPS));
    assert!(approx_eq((end - arc.center).norm(), arc.radius, EPS));
    assert!(approx_eq(arc.sagitta(), 0.3, EPS));

    let [a, b] = arc.chord_endpoints();
    assert!(vec_approx_eq(a, start, 1e-6));
    assert!(vec_approx_eq(b, end, 1e-6));
}

#[test]
fn sagitta_arc_relative_matches_absolute() {
    let base = Workplane::new().line(v(1.0, 2.0));
    let abs = base.clone().sagitta_arc_to(0.4, v(3.0, 3.0)).unwrap();
    let rel = base.sagitta_arc(0.4, v(2.0, 1.0)).unwrap();
    assert_eq!(abs.position, rel.position);
    assert!(vec_approx_eq(
        abs.auxiliary_shapes[0].center,
        rel.auxiliary_shapes[0].center,
        EPS
    ));
}

#[test]
fn sagitta_arc_rejects_bad_input() {
    assert_eq!(
        Workplane::new().sagitta_arc_to(0.0, v(1.0, 0.0)),
        Err(SketchError::InvalidSagitta(0.0))
    );
    assert_eq!(
        Workplane::new().sagitta_arc_to(-0.5, v(1.0, 0.0)),
        Err(SketchError::InvalidSagitta(-0.5))
    );
    assert!(matches!(
        Workplane::new().sagitta_arc_to(1.0, v(0.0, 0.0)),
        Err(SketchError::DegenerateGeometry { .. })
    ));
}

#[test]
fn radius_arc_agrees_with_derived_sagitta() {
    let base = Workplane::new().move_to(v(1.0, 1.0));
    let end = v(4.0, 3.0);
    let radius: Real = 5.0;
    let l = (end - base.position).norm() / 2.0;
    let sagitta = radius - (radius * radius - l * l).sqrt();

    let by_radius = base.clone().radius_arc_to(radius, end).unwrap();
    let by_sagitta = base.sagitta_arc_to(sagitta, end).unwrap();
    let a = by_radius.auxiliary_shapes[0];
    let b = by_sagitta.auxiliary_shapes[0];
    assert!(approx_eq(a.radius, radius, EPS));
    assert!(approx_eq(a.radius, b.radius, EPS));
    assert!(vec_approx_eq(a.center, b.center, EPS));
    assert!(approx_eq(a.half_plane_offset, b.half_plane_offset, EPS));
    assert_eq!(by_radius.points, by_sagitta.points);
}

#[test]
fn radius_arc_relative_and_half_chord_radius() {
    let wp = Workplane::new()
        .h_line(1.0)
        .radius_arc(1.0, v(0.0, 2.0))
        .unwrap();
    assert_eq!(wp.position, v(1.0, 2.0));
    let arc = wp.auxiliary_shapes[0];
    assert!(approx_eq(arc.radius, 1.0, EPS));
    assert!(vec_approx_eq(arc.center, v(1.0, 1.0), EPS));
}

#[test]
fn radius_arc_rejects_short_radius() {
    let err = Workplane::new().radius_arc_to(0.5, v(2.0, 0.0)).unwrap_err();
    assert_eq!(
        err,
        SketchError::InvalidRadius {
            radius: 0.5,
            half_chord: 1.0
        }
    );
    assert!(matches!(
        Workplane::new().radius_arc_to(-3.0, v(2.0, 0.0)),
        Err(SketchError::InvalidRadius { .. })
    ));
}

#[test]
fn radius_arc_accepts_huge_radius() {
    // r² overflows for this radius; the arc is still representable
    let wp = Workplane::new().radius_arc_to(1e200, v(2.0, 0.0)).unwrap();
    assert_eq!(wp.position, v(2.0, 0.0));
    let arc = wp.auxiliary_shapes[0];
    assert!((arc.radius / 1e200 - 1.0).abs() < 1e-9);
    assert!(arc.half_plane_offset.is_finite());
    assert!(approx_eq(arc.half_plane_normal.y, -1.0, EPS));
}

#[test]
fn radius_arc_near_the_float_limit_stays_valid() {
    // the sagitta is subnormal here but still positive
    let wp = Workplane::new().radius_arc_to(1e308, v(2.0, 0.0)).unwrap();
    assert_eq!(wp.position, v(2.0, 0.0));
    assert_eq!(wp.points, vec![v(0.0, 0.0), v(2.0, 0.0)]);
    assert!(wp.auxiliary_shapes[0].radius.is_finite());
}

#[test]
fn tangent_arc_quarter_turn_left() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(2.0, 1.0))
        .unwrap();
    assert_eq!(wp.position, v(2.0, 1.0));
    assert_eq!(wp.points.last(), Some(&v(2.0, 1.0)));
    assert!(vec_approx_eq(wp.tangent_normal, v(0.0, 1.0), EPS));

    let arc = wp.auxiliary_shapes[0];
    assert!(approx_eq(arc.radius, 1.0, EPS));
    assert!(vec_approx_eq(arc.center, v(1.0, 1.0), EPS));
    assert!(approx_eq(arc.sagitta(), 1.0 - (0.5 as Real).sqrt(), EPS));
    // arc midpoint sits on the boundary of the segment
    let mid = v(1.0, 1.0) + v(1.0, -1.0) / (2.0 as Real).sqrt();
    assert!(arc.is_on_boundary(&mid));
}

#[test]
fn tangent_arc_quarter_turn_right() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point(v(1.0, -1.0))
        .unwrap();
    assert_eq!(wp.position, v(2.0, -1.0));
    assert!(vec_approx_eq(wp.tangent_normal, v(0.0, -1.0), EPS));
    assert!(vec_approx_eq(wp.auxiliary_shapes[0].center, v(1.0, -1.0), EPS));
}

#[test]
fn tangent_arcs_chain_on_one_circle() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(2.0, 1.0))
        .unwrap()
        .tangent_arc_point_to(v(1.0, 2.0))
        .unwrap();
    assert!(vec_approx_eq(wp.tangent_normal, v(-1.0, 0.0), EPS));
    let [first, second] = [wp.auxiliary_shapes[0], wp.auxiliary_shapes[1]];
    assert!(vec_approx_eq(first.center, second.center, EPS));
    assert!(approx_eq(first.radius, second.radius, EPS));
}

#[test]
fn tangent_arc_semicircle_reverses_direction() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(1.0, 2.0))
        .unwrap();
    assert!(vec_approx_eq(wp.tangent_normal, v(-1.0, 0.0), EPS));
    let arc = wp.auxiliary_shapes[0];
    assert!(approx_eq(arc.half_plane_offset, 0.0, EPS));
    assert!(vec_approx_eq(arc.half_plane_normal, v(1.0, 0.0), EPS));
}

#[test]
fn tangent_arc_major_segment_contains_centre() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(0.0, 1.0))
        .unwrap();
    let arc = wp.auxiliary_shapes[0];
    assert!(vec_approx_eq(arc.center, v(1.0, 1.0), EPS));
    assert!(arc.half_plane_offset < 0.0);
    assert!(arc.contains(&arc.center));
    assert!(vec_approx_eq(wp.tangent_normal, v(0.0, -1.0), EPS));
}

#[test]
fn tangent_arc_with_tiny_turn_keeps_direction() {
    let wp = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(3.0, 1e-4))
        .unwrap();
    let incoming = v(1.0, 0.0);
    assert!(wp.tangent_normal.dot(&incoming) > 0.9999);
    assert!(approx_eq(wp.tangent_normal.norm(), 1.0, 1e-9));
}

#[test]
fn tangent_arc_needs_a_direction() {
    // `line` never sets a direction
    let wp = Workplane::new().line(v(1.0, 0.0));
    assert_eq!(
        wp.tangent_arc_point_to(v(2.0, 1.0)),
        Err(SketchError::MissingTangentContext)
    );
}

#[test]
fn tangent_arc_rejects_collinear_endpoint() {
    let ahead = Workplane::new().h_line(1.0).tangent_arc_point_to(v(3.0, 0.0));
    assert!(matches!(ahead, Err(SketchError::InvalidTangent { .. })));

    let behind = Workplane::new().h_line(1.0).tangent_arc_point_to(v(-3.0, 0.0));
    assert!(matches!(behind, Err(SketchError::InvalidTangent { .. })));

    let same = Workplane::new().h_line(1.0).tangent_arc_point_to(v(1.0, 0.0));
    assert!(matches!(same, Err(SketchError::DegenerateGeometry { .. })));
}

#[test]
fn sagitta_and_tangent_arcs_report_different_tangents() {
    let chord = Workplane::new()
        .h_line(1.0)
        .sagitta_arc_to(1.0 - (0.5 as Real).sqrt(), v(2.0, 1.0))
        .unwrap();
    let exact = Workplane::new()
        .h_line(1.0)
        .tangent_arc_point_to(v(2.0, 1.0))
        .unwrap();
    let s = (0.5 as Real).sqrt();
    assert!(vec_approx_eq(chord.tangent_normal, v(s, s), EPS));
    assert!(vec_approx_eq(exact.tangent_normal, v(0.0, 1.0), EPS));
    // same circle either way
    let (a, b) = (chord.auxiliary_shapes[0], exact.auxiliary_shapes[0]);
    assert!(vec_approx_eq(a.center, b.center, 1e-9));
    assert!(approx_eq(a.radius, b.radius, 1e-9));
    assert!(vec_approx_eq(a.half_plane_normal, b.half_plane_normal, 1e-9));
}
