//! Unit tests for OrderedSequence.
//!
//! Scenario tests for structural edits, slicing, transforms and folds.

use rstest::rstest;
use slicewise::OrderedSequence;
use slicewise::contract::{IndexRanger, Slicer};
use slicewise::sequence::DELETE_THROUGH_END;

fn sequence_of(elements: &[i32]) -> OrderedSequence<i32> {
    elements.iter().copied().collect()
}

// =============================================================================
// Construction and size
// =============================================================================

#[rstest]
fn test_new_creates_empty_sequence() {
    let sequence: OrderedSequence<i32> = OrderedSequence::new();
    assert!(sequence.is_empty());
    assert_eq!(sequence.len(), 0);
    assert_eq!(sequence.first(), None);
    assert_eq!(sequence.last(), None);
}

#[rstest]
fn test_with_capacity_reserves() {
    let sequence: OrderedSequence<u8> = OrderedSequence::with_capacity(64);
    assert!(sequence.capacity() >= 64);
    assert!(sequence.is_empty());
}

#[rstest]
fn test_clear_keeps_capacity_and_allows_reuse() {
    let mut sequence: OrderedSequence<i32> = (0..32).collect();
    let capacity = sequence.capacity();
    sequence.clear();
    assert_eq!(sequence.len(), 0);
    assert_eq!(sequence.capacity(), capacity);
    sequence.append([1, 2]);
    assert_eq!(sequence.raw(), &[1, 2]);
}

#[rstest]
fn test_from_array_and_into_vec() {
    let sequence = OrderedSequence::from([1, 2, 3]);
    let vector: Vec<i32> = sequence.into();
    assert_eq!(vector, vec![1, 2, 3]);
}

// =============================================================================
// Raw views
// =============================================================================

#[rstest]
fn test_raw_mut_writes_are_visible() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    for element in sequence.raw_mut() {
        *element *= 10;
    }
    assert_eq!(sequence.raw(), &[10, 20, 30]);
}

#[rstest]
fn test_raw_reflects_latest_mutation() {
    let mut sequence = sequence_of(&[1]);
    sequence.append(2..=100);
    let raw = sequence.raw();
    assert_eq!(raw.len(), 100);
    assert_eq!(raw[99], 100);
}

// =============================================================================
// pop / pop_front / append / prepend
// =============================================================================

#[rstest]
fn test_pop_and_pop_front() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    assert_eq!(sequence.pop(), Some(3));
    assert_eq!(sequence.pop_front(), Some(1));
    assert_eq!(sequence.raw(), &[2]);
    assert_eq!(sequence.pop(), Some(2));
    assert_eq!(sequence.pop(), None);
    assert_eq!(sequence.pop_front(), None);
}

#[rstest]
fn test_append_preserves_argument_order() {
    let mut sequence = sequence_of(&[1]);
    sequence.append([2, 3, 4]);
    assert_eq!(sequence.raw(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_prepend_first_argument_ends_up_first() {
    let mut sequence = sequence_of(&[9]);
    sequence.prepend([1, 2, 3]);
    assert_eq!(sequence.raw(), &[1, 2, 3, 9]);
}

#[rstest]
fn test_prepend_and_append_nothing() {
    let mut sequence = sequence_of(&[1, 2]);
    sequence.prepend(std::iter::empty()).append(Vec::new());
    assert_eq!(sequence.raw(), &[1, 2]);
}

// =============================================================================
// concat / reverse
// =============================================================================

#[rstest]
fn test_concat_does_not_mutate_operands() {
    let left = sequence_of(&[1, 2]);
    let right = sequence_of(&[3]);
    let combined = left.concat(&right);
    assert_eq!(combined.raw(), &[1, 2, 3]);
    assert_eq!(left.raw(), &[1, 2]);
    assert_eq!(right.raw(), &[3]);
}

#[rstest]
fn test_reverse_twice_restores() {
    let mut sequence = sequence_of(&[1, 2, 3, 4]);
    sequence.reverse().reverse();
    assert_eq!(sequence.raw(), &[1, 2, 3, 4]);
}

// =============================================================================
// sort
// =============================================================================

#[rstest]
fn test_sort_with_index_predicate_on_keys() {
    let mut sequence: OrderedSequence<(&str, u32)> =
        vec![("carol", 41), ("alice", 30), ("bob", 25)].into();
    sequence.sort(|raw, first, second| raw[first].1 < raw[second].1);
    let names = sequence.map(|(name, _)| *name);
    assert_eq!(names.raw(), &["bob", "alice", "carol"]);
}

#[rstest]
fn test_sort_descending_with_duplicates() {
    let mut sequence = sequence_of(&[3, 1, 3, 2, 1]);
    sequence.sort_by(|left, right| left > right);
    assert_eq!(sequence.raw(), &[3, 3, 2, 1, 1]);
}

#[rstest]
fn test_sort_large_reverse_input() {
    let mut sequence: OrderedSequence<i32> = (0..1000).rev().collect();
    sequence.sort_by_comparer();
    assert!(sequence.raw().windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(sequence.first(), Some(&0));
    assert_eq!(sequence.last(), Some(&999));
}

// =============================================================================
// slice
// =============================================================================

#[rstest]
#[case(None, None, &[0, 1, 2, 3, 4])]
#[case(Some(1), None, &[1, 2, 3, 4])]
#[case(Some(1), Some(3), &[1, 2])]
#[case(Some(-2), None, &[3, 4])]
#[case(Some(-100), Some(2), &[0, 1])]
#[case(None, Some(-1), &[0, 1, 2, 3])]
#[case(Some(3), Some(100), &[3, 4])]
#[case(Some(4), Some(1), &[])]
#[case(Some(5), None, &[])]
#[case(Some(-1), Some(-1), &[])]
fn test_slice(#[case] start: Option<isize>, #[case] end: Option<isize>, #[case] expected: &[i32]) {
    let sequence = sequence_of(&[0, 1, 2, 3, 4]);
    let sliced = sequence.slice(start, end);
    assert_eq!(sliced.raw(), expected);
    assert_eq!(sequence.len(), 5);
}

#[rstest]
fn test_slice_is_independent_copy() {
    let sequence = sequence_of(&[1, 2, 3]);
    let mut sliced = sequence.slice(None, None);
    sliced.append([4]);
    sliced.raw_mut()[0] = 100;
    assert_eq!(sequence.raw(), &[1, 2, 3]);
}

// =============================================================================
// splice
// =============================================================================

#[rstest]
fn test_splice_replaces_middle() {
    let mut sequence = sequence_of(&[1, 2, 3, 4, 5]);
    let removed = sequence.splice(1, 2, [9, 9]);
    assert_eq!(sequence.raw(), &[1, 9, 9, 4, 5]);
    assert_eq!(removed.raw(), &[2, 3]);
}

#[rstest]
fn test_splice_delete_through_end() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    let removed = sequence.splice(1, DELETE_THROUGH_END, []);
    assert_eq!(sequence.raw(), &[1]);
    assert_eq!(removed.raw(), &[2, 3]);
}

#[rstest]
fn test_splice_pure_insertion() {
    let mut sequence = sequence_of(&[1, 4]);
    let removed = sequence.splice(1, 0, [2, 3]);
    assert!(removed.is_empty());
    assert_eq!(sequence.raw(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_splice_removed_is_independent() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    let mut removed = sequence.splice(0, 1, []);
    removed.append([7]);
    assert_eq!(sequence.raw(), &[2, 3]);
    assert_eq!(removed.raw(), &[1, 7]);
}

#[rstest]
#[deny(unused_must_use)]
fn test_splice_as_statement_discards_removed() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    sequence.splice(0, 1, [9]);
    sequence.splice(-1, DELETE_THROUGH_END, []);
    assert_eq!(sequence.raw(), &[9, 2]);
}

#[rstest]
fn test_insert_clamps_position() {
    let mut sequence = sequence_of(&[2]);
    sequence.insert(-100, 1).insert(100, 3);
    assert_eq!(sequence.raw(), &[1, 2, 3]);
}

// =============================================================================
// map / filter / reject
// =============================================================================

#[rstest]
fn test_map_preserves_length_and_original() {
    let sequence = sequence_of(&[1, 2, 3]);
    let squared = sequence.map(|element| element * element);
    assert_eq!(squared.raw(), &[1, 4, 9]);
    assert_eq!(sequence.raw(), &[1, 2, 3]);
}

#[rstest]
fn test_filter_and_reject_partition() {
    let sequence: OrderedSequence<i32> = (1..=10).collect();
    let kept = sequence.filter(|element| element % 3 == 0);
    let rejected = sequence.reject(|element| element % 3 == 0);
    assert_eq!(kept.raw(), &[3, 6, 9]);
    assert_eq!(rejected.raw(), &[1, 2, 4, 5, 7, 8, 10]);
    assert_eq!(kept.len() + rejected.len(), sequence.len());
}

// =============================================================================
// every / some / reduce / reduce_right
// =============================================================================

#[rstest]
fn test_every_and_some() {
    let sequence = sequence_of(&[2, 4, 6]);
    assert!(sequence.every(|element| element % 2 == 0));
    assert!(!sequence.every(|element| *element > 2));
    assert!(sequence.some(|element| *element == 6));
    assert!(!sequence.some(|element| *element > 6));
}

#[rstest]
fn test_reduce_builds_string_left_to_right() {
    let sequence: OrderedSequence<&str> = vec!["a", "b", "c"].into();
    let joined = sequence.reduce(String::new(), |mut accumulator, element, _| {
        accumulator.push_str(element);
        accumulator
    });
    assert_eq!(joined, "abc");
}

#[rstest]
fn test_reduce_right_sum_and_index_order() {
    let sequence = sequence_of(&[1, 2, 3, 4]);
    let mut indices = Vec::new();
    let sum = sequence.reduce_right(0, |accumulator, element, index| {
        indices.push(index);
        accumulator + element
    });
    assert_eq!(sum, 10);
    assert_eq!(indices, vec![3, 2, 1, 0]);
}

#[rstest]
fn test_reduce_on_empty_returns_initial() {
    let sequence: OrderedSequence<i32> = OrderedSequence::new();
    assert_eq!(sequence.reduce(7, |accumulator, element, _| accumulator + element), 7);
    assert_eq!(
        sequence.reduce_right(7, |accumulator, element, _| accumulator + element),
        7
    );
}

// =============================================================================
// Contracts and iteration
// =============================================================================

#[rstest]
fn test_range_with_index_visits_all_when_true() {
    let sequence = sequence_of(&[4, 5, 6]);
    let mut visited = Vec::new();
    sequence.range_with_index(|index, element| {
        visited.push((index, *element));
        true
    });
    assert_eq!(visited, vec![(0, 4), (1, 5), (2, 6)]);
}

#[rstest]
fn test_to_sequence_is_equal_copy() {
    let sequence = sequence_of(&[1, 2]);
    assert_eq!(sequence.to_sequence(), sequence);
}

#[rstest]
fn test_iteration_forms() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    for element in &mut sequence {
        *element += 1;
    }
    let borrowed: Vec<&i32> = (&sequence).into_iter().collect();
    assert_eq!(borrowed, vec![&2, &3, &4]);
    let owned: Vec<i32> = sequence.into_iter().rev().collect();
    assert_eq!(owned, vec![4, 3, 2]);
}

#[rstest]
fn test_index_access() {
    let mut sequence = sequence_of(&[1, 2, 3]);
    sequence[1] = 20;
    assert_eq!(sequence[1], 20);
    assert_eq!(sequence.get(3), None);
}

#[rstest]
#[should_panic(expected = "index out of bounds")]
fn test_index_out_of_bounds_panics() {
    let sequence = sequence_of(&[1]);
    let _ = sequence[1];
}
