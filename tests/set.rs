use std::collections::BTreeSet;

use non_empty_collections::{NonEmptyList, NonEmptySet, Partition};

fn set(members: &[i32]) -> NonEmptySet<i32> {
    NonEmptySet::from_set(members.iter().copied().collect()).unwrap()
}

#[test]
fn test_union_picks_smaller_head() {
    let a = NonEmptySet::with_value(1, BTreeSet::from([3]));
    let b = NonEmptySet::with_value(2, BTreeSet::from([4]));
    let merged = a.union(b);
    assert_eq!(merged.head(), &1);
    assert_eq!(merged.rest(), &BTreeSet::from([2, 3, 4]));
}

#[test]
fn test_union_with_shared_members() {
    let merged = set(&[1, 2]).union(set(&[1, 3]));
    assert_eq!(merged, set(&[1, 2, 3]));
    let merged = set(&[5, 6]).union(set(&[2, 5]));
    assert_eq!(merged.head(), &2);
    assert_eq!(merged.rest(), &BTreeSet::from([5, 6]));
}

#[test]
fn test_from_list_selects_minimum() {
    let members = NonEmptyList::from_vec(vec![5, 3, 9, 3, 1]).unwrap();
    let built = NonEmptySet::from_list(members);
    assert_eq!(built.head(), &1);
    assert_eq!(built.last(), &9);
    assert_eq!(built.len(), 4);
}

#[test]
fn test_insert_and_remove() {
    let items = set(&[3, 5]);
    assert_eq!(items.clone().insert(1).head(), &1);
    assert_eq!(items.clone().insert(4).head(), &3);
    assert_eq!(items.clone().insert(3), items);
    assert_eq!(items.clone().remove(&3), Some(set(&[5])));
    assert_eq!(set(&[3]).remove(&3), None);
}

#[test]
fn test_diff_and_intersect() {
    assert_eq!(set(&[1, 2, 3]).diff(&set(&[2])), Some(set(&[1, 3])));
    assert_eq!(set(&[1, 2]).diff(&set(&[1, 2, 3])), None);
    assert_eq!(set(&[1, 2, 3]).intersect(&set(&[2, 3, 4])), Some(set(&[2, 3])));
    assert_eq!(set(&[1]).intersect(&set(&[2])), None);
}

#[test]
fn test_filter_partition_and_subset() {
    let even = |x: &i32| x % 2 == 0;
    assert_eq!(set(&[1, 2, 4]).filter(even), Some(set(&[2, 4])));
    assert_eq!(set(&[1, 3]).filter(even), None);
    assert_eq!(
        set(&[2, 4]).partition(even),
        Partition::OnlyMatches(set(&[2, 4]))
    );
    assert!(set(&[2]).is_subset(&set(&[1, 2])));
    assert!(!set(&[2, 7]).is_subset(&set(&[1, 2])));
}

#[test]
fn test_map_collapsing_members() {
    let halved = set(&[1, 2, 3, 4]).map(|x| x / 2);
    assert_eq!(halved, set(&[0, 1, 2]));
}

#[test]
fn test_contains_and_iteration_order() {
    let items = set(&[4, 2, 8]);
    assert!(items.contains(&2));
    assert!(!items.contains(&3));
    assert_eq!(items.iter().copied().collect::<Vec<_>>(), vec![2, 4, 8]);
    assert_eq!(items.clone().fold(0, |acc, x| acc * 10 + x), 248);
    assert_eq!(items.to_list().to_vec(), vec![2, 4, 8]);
}
