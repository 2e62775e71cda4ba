//! Tests for the coarse and fine generation pipeline

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use subtiling::subdivision::{Rule, generate};

    // Tests the coarse/fine sizes for the Penrose sun at level 2
    // Verified by deriving the fine layer from the seed
    #[test]
    fn test_penrose_generation_sizes() {
        let mut rng = StdRng::seed_from_u64(12);
        let generations = generate(
            Rule::Golden.seed(2000.0, 0.0),
            Rule::Golden,
            2,
            &mut rng,
            |_, _| {},
        );

        assert_eq!(generations.coarse.len(), 96);
        assert_eq!(generations.fine_tiles().map(<[_]>::len), Some(384));
    }

    // Tests that the pleasing rule produces no fine layer
    // Verified by always deflating the fine layer
    #[test]
    fn test_pleasing_has_single_generation() {
        let mut rng = StdRng::seed_from_u64(13);
        let generations = generate(
            Rule::Pleasing.seed(2000.0, 0.0),
            Rule::Pleasing,
            4,
            &mut rng,
            |_, _| {},
        );

        assert_eq!(generations.coarse.len(), 32);
        assert!(generations.fine.is_none());
    }

    // Tests that both generations are tagged independently and fully
    // Verified by copying coarse flags onto the fine children
    #[test]
    fn test_generations_are_tagged() {
        let mut rng = StdRng::seed_from_u64(14);
        let generations = generate(
            Rule::Regular.seed(2000.0, 0.0),
            Rule::Regular,
            3,
            &mut rng,
            |_, _| {},
        );
        let Some(fine) = generations.fine_tiles() else {
            unreachable!("regular rule renders a fine layer");
        };

        assert!(generations.coarse.iter().any(|tile| tile.flag.value() > 0));
        assert!(fine.iter().all(|tile| tile.flag.value() <= 10));

        // Children of one coarse tile would all share its flag without retagging
        let all_groups_uniform = fine.chunks(4).all(|group| {
            group
                .iter()
                .all(|tile| Some(tile.flag) == group.first().map(|first| first.flag))
        });
        assert!(!all_groups_uniform);
    }
}
