use min_heap::MinHeap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(Vec<i16>),
    Pop,
    Peek,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop::collection::vec(any::<i16>(), 0..5).prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::Peek),
    ]
}

fn is_heap<T, F: Fn(&T, &T) -> bool>(arr: &[T], less: F) -> bool {
    (1..arr.len()).all(|i| !less(&arr[i], &arr[(i - 1) / 2]))
}

proptest! {
    #[test]
    fn always_sort(mut items: Vec<u32>) {
        let mut heap = MinHeap::new(|a: &u32, b: &u32| a < b);

        for item in items.iter().copied() {
            heap.push(item);
        }

        let mut heap_order = vec![];
        while let Some(item) = heap.pop() {
            heap_order.push(item);
        }

        items.sort();

        prop_assert_eq!(items, heap_order);
    }

    #[test]
    fn batched_pushes_pop_sorted(batches in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..8), 0..8)) {
        let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
        let mut expected: Vec<i32> = Vec::new();

        for batch in batches {
            expected.extend(&batch);
            heap.push_all(batch);
        }
        expected.sort();

        prop_assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn invariant_holds_after_any_ops(ops in prop::collection::vec(op(), 0..64)) {
        let less = |a: &i16, b: &i16| a < b;
        let mut heap = MinHeap::new(less);
        let mut len = 0usize;

        for op in ops {
            match op {
                Op::Push(items) => {
                    len += items.len();
                    heap.push_all(items);
                }
                Op::Pop => {
                    let peeked = heap.peek().copied();
                    let popped = heap.pop();
                    prop_assert_eq!(peeked, popped);
                    if popped.is_some() {
                        len -= 1;
                    }
                }
                Op::Peek => {
                    let before = heap.as_slice().to_vec();
                    let _ = heap.peek();
                    prop_assert_eq!(heap.as_slice(), &before[..]);
                }
            }
            prop_assert_eq!(heap.len(), len);
            prop_assert!(is_heap(heap.as_slice(), less));
        }
    }

    #[test]
    fn from_vec_matches_repeated_push(items in prop::collection::vec(any::<i64>(), 0..200)) {
        let less = |a: &i64, b: &i64| a > b;
        let built = MinHeap::from_vec(items.clone(), less);
        prop_assert!(built.check_integrity());

        let mut pushed = MinHeap::new(less);
        pushed.push_all(items);

        prop_assert_eq!(built.into_sorted_vec(), pushed.into_sorted_vec());
    }

    #[test]
    fn extend_and_append_keep_invariant(a in prop::collection::vec(any::<u8>(), 0..100), b in prop::collection::vec(any::<u8>(), 0..100)) {
        let less = |x: &u8, y: &u8| x < y;
        let mut left = MinHeap::from_vec(a.clone(), less);
        let mut right = MinHeap::from_vec(b.clone(), less);
        left.append(&mut right);
        prop_assert!(left.check_integrity());
        prop_assert!(right.is_empty());

        let mut extended = MinHeap::from_vec(a.clone(), less);
        extended.extend(b.iter());
        prop_assert!(extended.check_integrity());

        let mut all = a;
        all.extend(b);
        all.sort();
        prop_assert_eq!(left.into_sorted_vec(), all.clone());
        prop_assert_eq!(extended.into_sorted_vec(), all);
    }
}
