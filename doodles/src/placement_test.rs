use super::*;

fn scenario() -> Region {
    Region::new(800.0, 1200.0, 250.0, 550.0)
}

fn assert_no_overlap(marks: &[PlacedMark], padding: f64) {
    for (i, a) in marks.iter().enumerate() {
        for b in &marks[i + 1..] {
            let min = a.footprint + b.footprint + padding;
            let dist = a.position().dist_sq(b.position()).sqrt();
            assert!(dist >= min - 1e-9, "{a:?} and {b:?} overlap: {dist} < {min}");
        }
    }
}

// =============================================================
// Seeds
// =============================================================

#[test]
fn slot_seed_formula() {
    assert_eq!(slot_seed(0, 0, 0), 1097);
    assert_eq!(slot_seed(0, 1, 1), 1207);
    assert_eq!(slot_seed(1, 0, 2), 2123);
}

#[test]
fn slot_seeds_are_unique_across_a_dense_pass() {
    let plan = BandPlan::for_region(&scenario());
    let mut seen = std::collections::HashSet::new();
    let mut index = 0;
    for band in plan.bands() {
        for slot in 0..band.count {
            assert!(seen.insert(slot_seed(band.index, slot, index)));
            index += 1;
        }
    }
    assert_eq!(seen.len(), 28);
}

#[test]
fn draw_seed_offsets_by_index() {
    assert_eq!(draw_seed(1097, 0), 1097);
    assert_eq!(draw_seed(1207, 1), 1214);
}

// =============================================================
// is_clear
// =============================================================

fn mark_at(x: f64, y: f64, footprint: f64) -> PlacedMark {
    PlacedMark {
        kind: MarkKind::Star,
        class: StrokeClass::Ink,
        side: Side::Left,
        x,
        y,
        footprint,
        seed: 0,
        draw_seed: 0,
    }
}

#[test]
fn clear_with_nothing_placed() {
    assert!(is_clear(Point::new(10.0, 10.0), 14.0, &[], &[], 8.0));
}

#[test]
fn exactly_touching_spacing_is_clear() {
    // 14 + 14 + 8 = 36.
    let placed = [mark_at(0.0, 0.0, 14.0)];
    assert!(is_clear(Point::new(36.0, 0.0), 14.0, &placed, &[], 8.0));
    assert!(!is_clear(Point::new(35.9, 0.0), 14.0, &placed, &[], 8.0));
}

#[test]
fn padded_zone_blocks_candidates() {
    let zones = [Rect::new(100.0, 100.0, 50.0, 50.0)];
    assert!(!is_clear(Point::new(125.0, 125.0), 14.0, &[], &zones, 8.0));
    assert!(!is_clear(Point::new(92.0, 125.0), 14.0, &[], &zones, 8.0));
    assert!(is_clear(Point::new(91.9, 125.0), 14.0, &[], &zones, 8.0));
}

// =============================================================
// scatter
// =============================================================

#[test]
fn scenario_places_every_mark_in_bounds() {
    let marks = scatter(&scenario(), &[], &PlacementConfig::default());
    assert_eq!(marks.len(), 28);
    for m in &marks {
        assert!((0.0..=800.0).contains(&m.x), "x out of range: {m:?}");
        assert!((90.0..=1140.0).contains(&m.y), "y out of range: {m:?}");
    }
}

#[test]
fn scenario_first_marks_are_fixed() {
    let marks = scatter(&scenario(), &[], &PlacementConfig::default());
    let first = marks[0];
    assert_eq!(first.kind, MarkKind::Heart);
    assert_eq!(first.class, StrokeClass::Ink);
    assert_eq!(first.side, Side::Left);
    assert!((first.x - 105.557_470_388_710_5).abs() < 1e-9);
    assert!((first.y - 137.993_126_129_294_98).abs() < 1e-9);

    let second = marks[1];
    assert_eq!(second.kind, MarkKind::Star);
    assert_eq!(second.side, Side::Right);
    assert_eq!(second.seed, 1207);
}

#[test]
fn scatter_is_deterministic() {
    let zones = [Rect::new(600.0, 300.0, 150.0, 120.0)];
    let a = scatter(&scenario(), &zones, &PlacementConfig::default());
    let b = scatter(&scenario(), &zones, &PlacementConfig::default());
    assert_eq!(a, b);
}

#[test]
fn scatter_keeps_marks_apart() {
    let config = PlacementConfig::default();
    for region in [
        scenario(),
        Region::new(1440.0, 3000.0, 420.0, 1020.0),
        Region::new(400.0, 900.0, 150.0, 250.0),
        Region::new(360.0, 700.0, 20.0, 340.0),
    ] {
        assert_no_overlap(&scatter(&region, &[], &config), config.padding);
    }
}

#[test]
fn scatter_respects_exclusion_zones() {
    let config = PlacementConfig::default();
    let zones = [Rect::new(20.0, 300.0, 200.0, 200.0), Rect::new(600.0, 700.0, 150.0, 90.0)];
    let marks = scatter(&scenario(), &zones, &config);
    assert!(!marks.is_empty());
    for m in &marks {
        for z in &zones {
            assert!(!z.expand(config.padding).contains(m.position()), "{m:?} inside {z:?}");
        }
    }
}

#[test]
fn dropped_slot_hands_its_assignment_to_the_next_slot() {
    // Band 3's left slot is blocked by the first zone, so the flower it was
    // assigned moves to the right slot and keeps the index of the seventh mark.
    let zones = [Rect::new(20.0, 300.0, 200.0, 200.0), Rect::new(600.0, 700.0, 150.0, 90.0)];
    let marks = scatter(&scenario(), &zones, &PlacementConfig::default());
    assert_eq!(marks.len(), 25);

    let kinds: Vec<_> = marks[..6].iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        [MarkKind::Heart, MarkKind::Star, MarkKind::Spiral, MarkKind::Spiral, MarkKind::Bolt, MarkKind::Heart]
    );

    let seventh = marks[6];
    assert_eq!(seventh.kind, MarkKind::Flower);
    assert_eq!(seventh.side, Side::Right);
    assert_eq!(seventh.seed, slot_seed(3, 1, 6));
    assert_eq!(seventh.draw_seed, 4314);
    assert!((seventh.x - 738.516_6).abs() < 1e-3, "x = {}", seventh.x);
    assert!((seventh.y - 304.667_2).abs() < 1e-3, "y = {}", seventh.y);

    for (i, m) in marks.iter().enumerate() {
        assert_eq!(m.draw_seed, draw_seed(m.seed, i));
    }
}

#[test]
fn fully_blocked_gutters_place_nothing() {
    let zones = [Rect::new(0.0, 90.0, 250.0, 1200.0), Rect::new(550.0, 90.0, 250.0, 1200.0)];
    let marks = scatter(&scenario(), &zones, &PlacementConfig::default());
    assert!(marks.is_empty());
}

#[test]
fn large_padding_under_fills_without_overlap() {
    let config = PlacementConfig { attempts: 12, padding: 200.0 };
    let marks = scatter(&scenario(), &[], &config);
    assert!(marks.len() < 28);
    assert!(!marks.is_empty());
    assert_no_overlap(&marks, config.padding);
}

#[test]
fn zero_attempts_places_nothing() {
    let config = PlacementConfig { attempts: 0, padding: 8.0 };
    assert!(scatter(&scenario(), &[], &config).is_empty());
}

#[test]
fn zero_region_completes_with_few_marks() {
    let marks = scatter(&Region::new(0.0, 0.0, 0.0, 0.0), &[], &PlacementConfig::default());
    assert!(marks.len() <= 16);
}

#[test]
fn narrow_left_gutter_moves_everything_right() {
    let marks = scatter(&Region::new(800.0, 1200.0, 30.0, 500.0), &[], &PlacementConfig::default());
    assert!(!marks.is_empty());
    assert!(marks.iter().all(|m| m.side == Side::Right && m.x > 500.0));
}

#[test]
fn sparse_region_requests_sixteen() {
    let marks = scatter(&Region::new(400.0, 1000.0, 92.0, 308.0), &[], &PlacementConfig::default());
    assert!(marks.len() <= 16);
    assert!(!marks.is_empty());
}
