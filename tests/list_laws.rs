//! Property-based laws for `CowList`.
//!
//! Each property checks the list against a `Vec` model of the same
//! contents, so any divergence in ordering, length bookkeeping, or
//! copy-on-write behaviour shows up as a counterexample.

use cowlist::CowList;
use cowlist::algorithms::{merge_sorted, middle, visit_in_reverse};
use proptest::prelude::*;

fn collect(list: &CowList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn element() -> impl Strategy<Value = i32> {
    -100i32..=100
}

fn elements() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(element(), 0..=64)
}

proptest! {
    #[test]
    fn law_from_iterator_preserves_order(values in elements()) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        prop_assert_eq!(collect(&list), values);
    }

    #[test]
    fn law_len_matches_iteration(values in elements()) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.len(), list.iter().count());
        prop_assert_eq!(list.is_empty(), values.is_empty());
    }

    #[test]
    fn law_head_and_last_track_the_ends(values in elements()) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        prop_assert_eq!(list.head(), values.first());
        prop_assert_eq!(list.last(), values.last());
    }

    #[test]
    fn law_push_prepends(values in elements(), extra in element()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        list.push(extra);

        let mut model = values;
        model.insert(0, extra);
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_append_extends(values in elements(), extra in element()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        list.append(extra);

        let mut model = values;
        model.push(extra);
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_pop_removes_the_head(values in elements()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        let popped = list.pop();

        let mut model = values;
        let expected = if model.is_empty() {
            None
        } else {
            Some(model.remove(0))
        };
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_remove_last_removes_the_tail(values in elements()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        let removed = list.remove_last();

        let mut model = values;
        prop_assert_eq!(removed, model.pop());
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_insert_after_matches_model(
        values in proptest::collection::vec(element(), 1..=64),
        index in 0usize..64,
        extra in element(),
    ) {
        let index = index % values.len();
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        let node = list.node_at(index).unwrap();
        list.insert_after(node, extra);

        let mut model = values;
        model.insert(index + 1, extra);
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_remove_after_matches_model(
        values in proptest::collection::vec(element(), 1..=64),
        index in 0usize..64,
    ) {
        let index = index % values.len();
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        let node = list.node_at(index).unwrap();
        let removed = list.remove_after(node);

        let mut model = values;
        let expected = if index + 1 < model.len() {
            Some(model.remove(index + 1))
        } else {
            None
        };
        prop_assert_eq!(removed, expected);
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_reverse_matches_model(values in elements()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        list.reverse();

        let mut model = values;
        model.reverse();
        prop_assert_eq!(list.head(), model.first());
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_reverse_is_an_involution(values in elements()) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        list.reverse();
        list.reverse();
        prop_assert_eq!(collect(&list), values);
    }

    #[test]
    fn law_remove_all_occurrences_matches_retain(
        values in elements(),
        target in element(),
    ) {
        let mut list: CowList<i32> = values.clone().into_iter().collect();
        list.remove_all_occurrences(&target);

        let mut model = values;
        model.retain(|value| *value != target);
        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.last(), model.last());
        prop_assert_eq!(collect(&list), model);
    }

    #[test]
    fn law_merge_is_a_sorted_union(left in elements(), right in elements()) {
        let mut left = left;
        let mut right = right;
        left.sort_unstable();
        right.sort_unstable();

        let left_list: CowList<i32> = left.clone().into_iter().collect();
        let right_list: CowList<i32> = right.clone().into_iter().collect();
        let merged = merge_sorted(left_list, right_list);

        let mut model = left;
        model.extend(right);
        model.sort_unstable();
        prop_assert_eq!(merged.last(), model.last());
        prop_assert_eq!(collect(&merged), model);
    }

    #[test]
    fn law_middle_is_the_len_over_two_element(
        values in proptest::collection::vec(element(), 1..=64),
    ) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        let node = middle(&list).unwrap();
        prop_assert_eq!(list.value(node), Some(&values[values.len() / 2]));
    }

    #[test]
    fn law_visit_in_reverse_matches_reversed_model(values in elements()) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        let mut seen = Vec::new();
        visit_in_reverse(&list, |value| seen.push(*value));

        let mut model = values;
        model.reverse();
        prop_assert_eq!(seen, model);
    }

    #[test]
    fn law_clone_is_independent(
        values in elements(),
        extra in element(),
    ) {
        let original: CowList<i32> = values.clone().into_iter().collect();
        let mut copy = original.clone();
        copy.append(extra);
        copy.push(extra);
        copy.pop();
        prop_assert_eq!(collect(&original), values);
    }

    #[test]
    fn law_equality_agrees_with_contents(left in elements(), right in elements()) {
        let left_list: CowList<i32> = left.clone().into_iter().collect();
        let right_list: CowList<i32> = right.clone().into_iter().collect();
        prop_assert_eq!(left_list == right_list, left == right);
    }

    #[test]
    fn law_into_iterator_drains_in_order(values in elements()) {
        let list: CowList<i32> = values.clone().into_iter().collect();
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), values);
    }
}
