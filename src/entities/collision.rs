use super::movable::Rect;

/// Anything with a bounding rectangle that can take part in hit resolution.
pub trait Collider {
    fn rect(&self) -> Rect;
}

/// A matched pair removed from two collections by [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<A, B> {
    pub first: A,
    pub second: B,
}

/// Pairs overlapping items of `group_a` and `group_b` and removes them.
///
/// Items of `group_a` are visited in order; each takes the first unmatched
/// item of `group_b` (in order) that overlaps it. An item is matched at most
/// once per pass. Survivors keep their relative order.
pub fn resolve<A: Collider, B: Collider>(
    group_a: &mut Vec<A>,
    group_b: &mut Vec<B>,
) -> Vec<Hit<A, B>> {
    let mut taken_b = vec![false; group_b.len()];
    let mut pairs: Vec<(usize, usize)> = Vec::new();

    for (a_idx, a) in group_a.iter().enumerate() {
        let a_rect = a.rect();
        let found = group_b
            .iter()
            .enumerate()
            .find(|(b_idx, b)| !taken_b[*b_idx] && a_rect.overlaps(&b.rect()));

        if let Some((b_idx, _)) = found {
            taken_b[b_idx] = true;
            pairs.push((a_idx, b_idx));
        }
    }

    if pairs.is_empty() {
        return Vec::new();
    }

    let mut slots_a: Vec<Option<A>> = group_a.drain(..).map(Some).collect();
    let mut slots_b: Vec<Option<B>> = group_b.drain(..).map(Some).collect();

    let hits = pairs
        .into_iter()
        .filter_map(|(a_idx, b_idx)| {
            match (slots_a[a_idx].take(), slots_b[b_idx].take()) {
                (Some(first), Some(second)) => Some(Hit { first, second }),
                _ => None,
            }
        })
        .collect();

    group_a.extend(slots_a.into_iter().flatten());
    group_b.extend(slots_b.into_iter().flatten());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Block {
        id: u32,
        rect: Rect,
    }

    impl Collider for Block {
        fn rect(&self) -> Rect {
            self.rect
        }
    }

    fn block(id: u32, x: i32, y: i32) -> Block {
        Block {
            id,
            rect: Rect::new(x, y, 10, 10),
        }
    }

    #[test]
    fn test_resolve_removes_only_the_overlapping_pair() {
        let mut aliens = vec![block(1, 0, 0), block(2, 100, 0), block(3, 200, 0)];
        let mut bullets = vec![block(10, 500, 500), block(11, 105, 5)];

        let hits = resolve(&mut aliens, &mut bullets);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first.id, 2);
        assert_eq!(hits[0].second.id, 11);
        assert_eq!(
            aliens.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(bullets.iter().map(|b| b.id).collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_resolve_without_overlap_leaves_groups_untouched() {
        let mut aliens = vec![block(1, 0, 0), block(2, 50, 0)];
        let mut bullets = vec![block(10, 300, 300)];
        let aliens_before = aliens.clone();
        let bullets_before = bullets.clone();

        let hits = resolve(&mut aliens, &mut bullets);

        assert!(hits.is_empty());
        assert_eq!(aliens, aliens_before);
        assert_eq!(bullets, bullets_before);
    }

    #[test]
    fn test_each_item_matches_at_most_once() {
        // Two aliens stacked under one bullet: only the first alien is hit.
        let mut aliens = vec![block(1, 0, 0), block(2, 0, 5)];
        let mut bullets = vec![block(10, 2, 2)];

        let hits = resolve(&mut aliens, &mut bullets);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first.id, 1);
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].id, 2);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_first_unmatched_bullet_wins() {
        let mut aliens = vec![block(1, 0, 0), block(2, 8, 0)];
        let mut bullets = vec![block(10, 5, 0), block(11, 6, 0)];

        let hits = resolve(&mut aliens, &mut bullets);

        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].first.id, hits[0].second.id), (1, 10));
        assert_eq!((hits[1].first.id, hits[1].second.id), (2, 11));
        assert!(aliens.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_pairs_survive_crossed_indices() {
        // Alien 0 matches the later bullet and alien 1 the earlier one.
        let mut aliens = vec![block(1, 100, 0), block(2, 0, 0)];
        let mut bullets = vec![block(10, 0, 0), block(11, 100, 0)];

        let hits = resolve(&mut aliens, &mut bullets);

        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].first.id, hits[0].second.id), (1, 11));
        assert_eq!((hits[1].first.id, hits[1].second.id), (2, 10));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_resolve_conserves_items(
                a_pos in prop::collection::vec((0i32..200, 0i32..200), 0..20),
                b_pos in prop::collection::vec((0i32..200, 0i32..200), 0..20)
            ) {
                let mut group_a: Vec<Block> = a_pos
                    .iter()
                    .enumerate()
                    .map(|(i, (x, y))| block(i as u32, *x, *y))
                    .collect();
                let mut group_b: Vec<Block> = b_pos
                    .iter()
                    .enumerate()
                    .map(|(i, (x, y))| block(1000 + i as u32, *x, *y))
                    .collect();
                let a_len = group_a.len();
                let b_len = group_b.len();

                let hits = resolve(&mut group_a, &mut group_b);

                prop_assert_eq!(group_a.len() + hits.len(), a_len);
                prop_assert_eq!(group_b.len() + hits.len(), b_len);
                for hit in &hits {
                    prop_assert!(hit.first.rect.overlaps(&hit.second.rect));
                }
            }
        }
    }
}
