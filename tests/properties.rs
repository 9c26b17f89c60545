use std::collections::HashSet;

use lazyseq::prelude::*;
use lazyseq::subsets::binomial;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..6, 0..40)
}

proptest! {
    #[test]
    fn power_set_is_complete_and_ordered(len in 0usize..10) {
        let positions: Vec<usize> = (0..len).collect();
        let all: Vec<Vec<usize>> = subsets(positions).items().collect();

        prop_assert_eq!(all.len(), 1usize << len);
        let unique: HashSet<&Vec<usize>> = all.iter().collect();
        prop_assert_eq!(unique.len(), all.len(), "no subset repeats");
        for subset in &all {
            prop_assert!(subset.windows(2).all(|w| w[0] < w[1]), "ascending by position");
        }
    }

    #[test]
    fn k_combinations_match_binomial(len in 0usize..10, k in 0usize..12) {
        let data: Vec<usize> = (0..len).collect();
        let source = subsets_k(data, k);
        prop_assert_eq!(source.remaining(), binomial(len, k));

        let all: Vec<Vec<usize>> = source.items().collect();
        prop_assert_eq!(Some(all.len()), binomial(len, k));
        for combo in &all {
            prop_assert_eq!(combo.len(), k);
            prop_assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }
        prop_assert!(all.windows(2).all(|w| w[0] < w[1]), "lexicographic order");
    }

    #[test]
    fn fixed_combinations_match_runtime(len in 0usize..9) {
        let data: Vec<usize> = (0..len).collect();
        let fixed: Vec<Vec<usize>> = subsets_fixed::<_, 3>(data.clone())
            .items()
            .map(|c| c.to_vec())
            .collect();
        let runtime: Vec<Vec<usize>> = subsets_k(data, 3).items().collect();
        prop_assert_eq!(fixed, runtime);
    }

    #[test]
    fn distinct_is_idempotent(values in small_vec()) {
        let once: Vec<u8> = from_iter(values.clone()).distinct().items().collect();
        let twice: Vec<u8> = from_iter(values.clone()).distinct().distinct().items().collect();
        prop_assert_eq!(&once, &twice);

        let mut seen = HashSet::new();
        let expected: Vec<u8> = values.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(once, expected);
    }

    #[test]
    fn group_by_round_trips(values in small_vec()) {
        let runs: Vec<Vec<u8>> = from_iter(values.clone()).group_by(|v| v / 2).items().collect();
        let flat: Vec<u8> = runs.iter().flatten().copied().collect();
        prop_assert_eq!(&flat, &values);

        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.iter().all(|v| v / 2 == run[0] / 2));
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0][0] / 2, pair[1][0] / 2, "runs are maximal");
        }
    }

    #[test]
    fn partition_matches_slice_windows(values in small_vec(), step in 1usize..6) {
        let windows: Vec<[u8; 3]> = from_iter(values.clone())
            .partition_step::<3>(step)
            .expect("step is positive")
            .items()
            .collect();
        let expected: Vec<[u8; 3]> = values
            .windows(3)
            .step_by(step)
            .map(|w| [w[0], w[1], w[2]])
            .collect();
        prop_assert_eq!(windows, expected);
    }

    #[test]
    fn product_size_is_product_of_sizes(a in 0usize..5, b in 0usize..5, c in 0usize..5) {
        let source = product((from_iter(0..a), from_iter(0..b), from_iter(0..c)));
        prop_assert_eq!(source.remaining(), Some(a * b * c));

        let tuples: Vec<(usize, usize, usize)> = source.items().collect();
        prop_assert_eq!(tuples.len(), a * b * c);
        let odometer = |&(x, y, z): &(usize, usize, usize)| (z, y, x);
        prop_assert!(tuples.windows(2).all(|w| odometer(&w[0]) < odometer(&w[1])));
    }
}
