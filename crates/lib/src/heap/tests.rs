use super::MinHeap;

#[test]
fn test_pop_order() {
    let mut heap = MinHeap::new();

    for n in [5, 3, 8, 1] {
        heap.push(n);
    }

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(8));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_single_value() {
    let mut heap = MinHeap::new();
    heap.push("only");
    assert_eq!(heap.pop(), Some("only"));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_empty() {
    let mut heap = MinHeap::<u32>::default();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_top_k_via_negation() {
    let mut heap = MinHeap::new();

    for sum in [10i64, 7, 15] {
        heap.push(-sum);
    }

    let mut top = Vec::new();

    while let Some(n) = heap.pop() {
        top.push(-n);
    }

    assert_eq!(top, [15, 10, 7]);
}

#[test]
fn test_duplicates() {
    let heap = [4, 1, 4, 1, 4, 2].into_iter().collect::<MinHeap<_>>();
    assert_eq!(heap.into_sorted_vec(), [1, 1, 2, 4, 4, 4]);
}

#[test]
fn test_interleaved() {
    let mut heap = MinHeap::new();
    heap.push(10);
    heap.push(20);
    assert_eq!(heap.pop(), Some(10));
    heap.push(5);
    heap.push(30);
    heap.push(15);
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(15));
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_invariant_after_every_pop() {
    let mut heap = (0..64).rev().map(|n| (n * 37) % 64).collect::<MinHeap<u32>>();

    while !heap.is_empty() {
        for (i, value) in heap.values.iter().enumerate().skip(1) {
            assert!(heap.values[(i - 1) / 2] <= *value, "parent of {i} is larger");
        }

        heap.pop();
    }
}
