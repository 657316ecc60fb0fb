use im_rc::vector;
use non_empty_collections::{NonEmptyList, Partition};

fn list(items: &[i32]) -> NonEmptyList<i32> {
    NonEmptyList::from_vec(items.to_vec()).unwrap()
}

#[test]
fn test_partition_even_numbers() {
    let even = |x: &i32| x % 2 == 0;

    assert_eq!(
        list(&[1, 2, 3, 4, 5, 6]).partition(even),
        Partition::Both(list(&[2, 4, 6]), list(&[1, 3, 5]))
    );
    assert_eq!(
        list(&[1, 3, 5]).partition(even),
        Partition::NoMatches(list(&[1, 3, 5]))
    );
    assert_eq!(
        list(&[2, 4, 6]).partition(even),
        Partition::OnlyMatches(list(&[2, 4, 6]))
    );
}

#[test]
fn test_filter_promotes_rest_when_head_fails() {
    assert_eq!(list(&[1, 2, 3, 4]).filter(|x| x % 2 == 0), Some(list(&[2, 4])));
    assert_eq!(list(&[2, 3, 4]).filter(|x| x % 2 == 0), Some(list(&[2, 4])));
    assert_eq!(list(&[1, 3]).filter(|x| x % 2 == 0), None);
}

#[test]
fn test_filter_map() {
    let parsed = NonEmptyList::from_vec(vec!["x", "1", "y", "2"])
        .unwrap()
        .filter_map(|s| s.parse::<i32>().ok());
    assert_eq!(parsed, Some(list(&[1, 2])));

    let none = NonEmptyList::singleton("x").filter_map(|s| s.parse::<i32>().ok());
    assert_eq!(none, None);
}

#[test]
fn test_drop_saturates_at_last_element() {
    assert_eq!(list(&[1, 2, 3]).drop(10), list(&[3]));
}

#[test]
fn test_total_queries() {
    let items = list(&[3, 9, 1, 4]);
    assert_eq!(items.head(), &3);
    assert_eq!(items.last(), &4);
    assert_eq!(items.maximum(), &9);
    assert_eq!(items.minimum(), &1);
    assert_eq!(items.clone().sum(), 17);
    assert_eq!(items.product(), 108);
    assert_eq!(NonEmptyList::singleton(5).last(), &5);
}

#[test]
fn test_by_key_queries_pick_extremes() {
    let words = NonEmptyList::from_vec(vec!["pear", "fig", "banana"]).unwrap();
    assert_eq!(words.maximum_by_key(|w| w.len()), &"banana");
    assert_eq!(words.minimum_by_key(|w| w.len()), &"fig");
}

#[test]
fn test_structure_preserving_transforms() {
    assert_eq!(list(&[1, 2, 3]).cons(0), list(&[0, 1, 2, 3]));
    assert_eq!(list(&[1, 2]).push(3), list(&[1, 2, 3]));
    assert_eq!(list(&[1, 2]).append(list(&[3, 4])), list(&[1, 2, 3, 4]));
    assert_eq!(list(&[1, 2, 3]).reverse(), list(&[3, 2, 1]));
    assert_eq!(list(&[1]).reverse(), list(&[1]));
    assert_eq!(list(&[1, 2, 3]).map(|x| x * 10), list(&[10, 20, 30]));
    assert_eq!(
        list(&[5, 6]).indexed_map(|i, x| i as i32 * x),
        list(&[0, 6])
    );
    assert_eq!(list(&[1, 2, 3]).intersperse(0), list(&[1, 0, 2, 0, 3]));
    assert_eq!(list(&[1, 2, 3]).map_head(|x| x + 100), list(&[101, 2, 3]));
}

#[test]
fn test_zip_truncates_to_shorter() {
    let zipped = list(&[1, 2, 3]).zip(NonEmptyList::from_vec(vec!['a', 'b']).unwrap());
    assert_eq!(zipped.to_vec(), vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn test_concat_and_concat_map() {
    let nested = NonEmptyList::from_vec(vec![list(&[1, 2]), list(&[3]), list(&[4, 5])]).unwrap();
    assert_eq!(NonEmptyList::concat(nested), list(&[1, 2, 3, 4, 5]));
    assert_eq!(
        list(&[1, 2]).concat_map(|x| list(&[x, x])),
        list(&[1, 1, 2, 2])
    );
}

#[test]
fn test_folds() {
    let items = list(&[1, 2, 3]);
    assert_eq!(items.clone().fold(String::new(), |acc, x| format!("{acc}{x}")), "123");
    assert_eq!(
        items.clone().fold_right(String::new(), |x, acc| format!("{acc}{x}")),
        "321"
    );
    assert_eq!(items.reduce(|a, b| a * 10 + b), 123);
}

#[test]
fn test_pop_and_plain_conversion() {
    assert_eq!(list(&[1, 2]).pop(), Some(list(&[2])));
    assert_eq!(list(&[1]).pop(), None);
    assert_eq!(list(&[1, 2, 3]).into_vector(), vector![1, 2, 3]);
    assert_eq!(NonEmptyList::<i32>::from_vector(vector![]), None);
    assert!(NonEmptyList::<i32>::try_from(Vec::new()).is_err());
}

#[test]
fn test_membership() {
    let items = list(&[1, 2, 3]);
    assert!(items.contains(&2));
    assert!(!items.contains(&7));
    assert!(items.all(|x| *x > 0));
    assert!(items.any(|x| *x == 3));
    assert_eq!(items.get(0), Some(&1));
    assert_eq!(items.get(2), Some(&3));
    assert_eq!(items.get(3), None);
}
