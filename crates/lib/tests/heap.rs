//! Property tests for the binary min-heap.

use lib::heap::MinHeap;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pops_in_sorted_order(values in prop::collection::vec(any::<i32>(), 0..256)) {
        let heap = values.iter().copied().collect::<MinHeap<_>>();

        let mut expected = values;
        expected.sort();

        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn popped_value_is_below_remaining(ops in prop::collection::vec((any::<bool>(), -1000i32..1000), 0..256)) {
        let mut heap = MinHeap::new();
        let mut held = Vec::new();

        for (pop, value) in ops {
            if pop {
                match heap.pop() {
                    Some(min) => {
                        prop_assert!(held.iter().all(|v| min <= *v));
                        let at = held.iter().position(|v| *v == min).expect("popped value was inserted");
                        held.swap_remove(at);
                    }
                    None => {
                        prop_assert!(held.is_empty());
                    }
                }
            } else {
                heap.push(value);
                held.push(value);
            }

            prop_assert_eq!(heap.len(), held.len());
            prop_assert_eq!(heap.peek().copied(), held.iter().min().copied());
        }
    }

    #[test]
    fn empty_after_draining(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut heap = MinHeap::new();
        heap.extend(values.iter().copied());

        for _ in 0..values.len() {
            prop_assert!(heap.pop().is_some());
        }

        prop_assert_eq!(heap.pop(), None);
    }
}
