//! Tests for the randomized longest-edge split

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use subtiling::geometry::Point;
    use subtiling::subdivision::pleasing::{
        Edge, deflate_pleasing, longest_edge, split_at, split_ratio,
    };
    use subtiling::subdivision::{Kind, Tile};

    // 3-4-5 triangle with AB = 5, AC = 3, BC = 4
    fn pythagorean() -> Tile {
        Tile::new(
            Kind::Border,
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(1.8, 2.4),
        )
    }

    // Tests longest-edge detection on each edge
    // Verified by comparing unsquared lengths with the wrong operator
    #[test]
    fn test_longest_edge_detection() {
        assert_eq!(longest_edge(&pythagorean()), Edge::AB);

        let ac_longest = Tile::new(
            Kind::Border,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 6.0),
        );
        assert_eq!(longest_edge(&ac_longest), Edge::AC);

        let bc_longest = Tile::new(
            Kind::Border,
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
        );
        assert_eq!(longest_edge(&bc_longest), Edge::BC);
    }

    // Tests that ties go to the first edge checked
    // Verified by reordering the comparisons
    #[test]
    fn test_longest_edge_ties() {
        let height = 3.0_f64.sqrt();
        let equilateral = Tile::new(
            Kind::Border,
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, height),
        );
        assert_eq!(longest_edge(&equilateral), Edge::AB);

        // AC and BC equal and longer than AB
        let isosceles = Tile::new(
            Kind::Border,
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 10.0),
        );
        assert_eq!(longest_edge(&isosceles), Edge::AC);
    }

    // Tests that the split point sits on AB for the 3-4-5 triangle
    // Verified by splitting the shortest edge instead
    #[test]
    fn test_split_point_on_longest_edge() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let [left, right] = deflate_pleasing(&pythagorean(), &mut rng);
            let d = left.shape.b();
            assert!(d.y.abs() < 1e-12, "split point {d:?} is off AB");
            assert!((1.5..=3.5).contains(&d.x), "split point {d:?} outside clamp");
            assert_eq!(right.shape.a(), d);
            assert_eq!(left.shape.c(), Point::new(1.8, 2.4));
            assert_eq!(right.shape.c(), Point::new(1.8, 2.4));
        }
    }

    // Tests exact placement and area preservation at a fixed ratio
    // Verified by measuring the ratio from the second endpoint
    #[test]
    fn test_split_at_ratio() {
        let tile = pythagorean();
        let [left, right] = split_at(&tile, 0.3);

        assert!((left.shape.b().x - 1.5).abs() < 1e-12);
        let total = left.shape.area() + right.shape.area();
        assert!((total - tile.shape.area()).abs() < 1e-9);
        assert!((left.shape.area() - 0.3 * tile.shape.area()).abs() < 1e-9);
        assert_eq!(left.kind, tile.kind);
        assert_eq!(right.flag, tile.flag);
    }

    // Tests that drawn ratios respect the clamp
    // Verified by widening the clamp bounds
    #[test]
    fn test_split_ratio_clamped() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..5_000 {
            let ratio = split_ratio(&mut rng);
            assert!((0.3..=0.7).contains(&ratio));
        }
    }
}
