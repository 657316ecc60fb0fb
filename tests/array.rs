use non_empty_collections::{NonEmptyArray, NonEmptyList, Partition};

fn array(items: &[i32]) -> NonEmptyArray<i32> {
    NonEmptyArray::from_vec(items.to_vec()).unwrap()
}

#[test]
fn test_indexing_maps_onto_head_and_rest() {
    let items = array(&[10, 20, 30]);
    assert_eq!(items.get(0), Some(&10));
    assert_eq!(items.get(1), Some(&20));
    assert_eq!(items.get(3), None);
    assert_eq!(items.rest(), &[20, 30]);
    assert_eq!(items.len(), 3);
}

#[test]
fn test_set_and_update() {
    assert_eq!(array(&[1, 2, 3]).set(1, 7), array(&[1, 7, 3]));
    assert_eq!(array(&[1, 2, 3]).update(2, |x| x * 2), array(&[1, 2, 6]));
    assert_eq!(array(&[1, 2, 3]).update(5, |x| x * 2), array(&[1, 2, 3]));
}

#[test]
fn test_filter_and_partition() {
    assert_eq!(array(&[1, 2, 3, 4]).filter(|x| *x > 2), Some(array(&[3, 4])));
    assert_eq!(array(&[1, 2]).filter(|x| *x > 2), None);
    assert_eq!(
        array(&[2, 3, 4]).partition(|x| x % 2 == 0),
        Partition::Both(array(&[2, 4]), array(&[3]))
    );
    assert_eq!(
        array(&[1, 3]).partition(|x| x % 2 == 0),
        Partition::NoMatches(array(&[1, 3]))
    );
}

#[test]
fn test_total_folds() {
    let items = array(&[4, 1, 7]);
    assert_eq!(items.maximum(), &7);
    assert_eq!(items.minimum(), &1);
    assert_eq!(items.last(), &7);
    assert_eq!(items.clone().sum(), 12);
    assert_eq!(items.product(), 28);
}

#[test]
fn test_structure_preserving_transforms() {
    assert_eq!(array(&[1, 2]).push(3), array(&[1, 2, 3]));
    assert_eq!(array(&[1]).append(array(&[2, 3])), array(&[1, 2, 3]));
    assert_eq!(array(&[1, 2, 3]).reverse(), array(&[3, 2, 1]));
    assert_eq!(array(&[1, 2]).map(|x| x.to_string()).into_vec(), vec!["1", "2"]);
    assert_eq!(
        array(&[1, 2]).to_list(),
        NonEmptyList::from_vec(vec![1, 2]).unwrap()
    );
}

#[test]
fn test_round_trip_through_vec() {
    let items = array(&[5, 6, 7]);
    assert_eq!(NonEmptyArray::from_vec(items.clone().into_vec()), Some(items));
    assert!(NonEmptyArray::<u8>::try_from(Vec::new()).is_err());
}
