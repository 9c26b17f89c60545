use lazyseq::prelude::*;

fn collect<S: Source>(source: S) -> Vec<S::Item> {
    source.items().collect()
}

#[test]
fn partition_non_overlapping() {
    assert_eq!(
        collect(partition::<_, 3>(from_iter(1..=9))),
        vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]]
    );
}

#[test]
fn partition_overlapping_by_one() {
    let source = partition_step::<_, 3>(from_iter(1..=9), 2).expect("step is positive");
    assert_eq!(collect(source), vec![[1, 2, 3], [3, 4, 5], [5, 6, 7], [7, 8, 9]]);
}

#[test]
fn partition_skipping_one() {
    let source = partition_step::<_, 2>(from_iter(1..=9), 3).expect("step is positive");
    assert_eq!(collect(source), vec![[1, 2], [4, 5], [7, 8]]);
}

#[test]
fn partition_rejects_zero_step_before_pulling() {
    let mut pulled = false;
    let source = from_fn(|| {
        pulled = true;
        Some(1)
    });
    assert_eq!(source.partition_step::<2>(0).err(), Some(SeqError::ZeroStep));
    assert!(!pulled);
}

#[test]
fn group_by_first_letter() {
    let words = ["face", "foo", "bar", "book", "baz", "zzz"];
    let runs = collect(group_by(|w: &&str| w.as_bytes()[0], from_iter(words)));
    assert_eq!(
        runs,
        vec![vec!["face", "foo"], vec!["bar", "book", "baz"], vec!["zzz"]]
    );
}

#[test]
fn distinct_keeps_first_occurrence_order() {
    let values = [1, 1, 2, 1, 2, 4, 1, 2, 3, 4];
    assert_eq!(collect(distinct(from_iter(values))), vec![1, 2, 4, 3]);
}

#[test]
fn product_first_source_fastest() {
    let pairs = collect(product((from_iter([1, 2, 3]), from_iter([4, 5]))));
    assert_eq!(pairs, vec![(1, 4), (2, 4), (3, 4), (1, 5), (2, 5), (3, 5)]);
}

#[test]
fn subsets_power_set_of_three() {
    let all = collect(subsets(vec!['a', 'b', 'c']));
    assert_eq!(all.len(), 8);
    assert_eq!(all.first(), Some(&vec![]));
    assert_eq!(all.last(), Some(&vec!['a', 'b', 'c']));
}

#[test]
fn subsets_degenerate_sizes() {
    let data = vec![1, 2, 3];
    assert_eq!(collect(subsets_k(data.clone(), 0)), vec![Vec::<i32>::new()]);
    assert_eq!(collect(subsets_k(data.clone(), 4)).len(), 0);
    assert_eq!(collect(subsets_fixed::<_, 0>(data.clone())), vec![[]]);
    assert_eq!(collect(subsets_fixed::<_, 4>(data)).len(), 0);
}

#[test]
fn combinators_compose() {
    // distinct pairs of consecutive letters, grouped by whether they match
    let text = "aabbbcab";
    let windows = from_iter(text.chars())
        .partition_step::<2>(1)
        .expect("step is positive")
        .distinct();
    let runs = collect(windows.group_by(|[a, b]| a == b));
    assert_eq!(
        runs,
        vec![
            vec![['a', 'a']],
            vec![['a', 'b']],
            vec![['b', 'b']],
            vec![['b', 'c'], ['c', 'a']],
        ]
    );
}

#[test]
fn product_of_partitions_and_subsets() {
    let rows = from_iter(1..=4).partition::<2>();
    let picks = from_iter(subsets_k(vec!['x', 'y', 'z'], 2).items());
    let pairs = collect(product((rows, picks)));
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[0], ([1, 2], vec!['x', 'y']));
    assert_eq!(pairs[1], ([3, 4], vec!['x', 'y']));
    assert_eq!(pairs[5], ([3, 4], vec!['y', 'z']));
}

#[test]
fn strict_take_of_endless_product() {
    let endless = product((from_iter(0..2), repeatedly(|| 'r')));
    let taken: Result<Vec<_>, _> = endless.take_strict(5).items().collect();
    assert_eq!(
        taken,
        Ok(vec![(0, 'r'), (1, 'r'), (0, 'r'), (1, 'r'), (0, 'r')])
    );
}

#[test]
fn chain_and_cycle_compose_with_distinct() {
    let source = chain(from_iter([3, 1]), from_iter([1, 2]).cycle_n(3)).distinct();
    assert_eq!(source.size_class(), SizeClass::Unknown);
    assert_eq!(collect(source), vec![3, 1, 2]);
}
