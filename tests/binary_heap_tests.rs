use fib_sssp::data_structures::BinaryMinHeap;
use fib_sssp::{Error, PriorityItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn item(value: u64) -> PriorityItem<u64> {
    PriorityItem::new(value as usize, value)
}

fn drain(heap: &mut BinaryMinHeap<PriorityItem<u64>>) -> Vec<u64> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.extract_min().unwrap().distance);
        heap.check_invariants().unwrap();
    }
    out
}

#[test]
fn test_extract_min_order() {
    let mut heap = BinaryMinHeap::new();
    for v in [7, 3, 21, 23, 18] {
        heap.insert(item(v)).unwrap();
        heap.check_invariants().unwrap();
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.minimum().unwrap().distance, 3);
    assert_eq!(drain(&mut heap), vec![3, 7, 18, 21, 23]);
}

#[test]
fn test_decrease_key_by_identity() {
    let mut heap = BinaryMinHeap::from_vec([17, 24, 23, 7, 21].into_iter().map(item).collect()).unwrap();
    heap.check_invariants().unwrap();

    heap.decrease_key(23, 2).unwrap();
    heap.check_invariants().unwrap();
    assert_eq!(heap.get(23).unwrap().distance, 2);

    let min = heap.extract_min().unwrap();
    assert_eq!(min.id, 23);
    assert_eq!(min.distance, 2);
    assert!(!heap.contains(23));
}

#[test]
fn test_decrease_key_errors() {
    let mut heap = BinaryMinHeap::from_vec(vec![item(5), item(9)]).unwrap();

    assert_eq!(heap.decrease_key(42, 1).unwrap_err(), Error::OutOfRange(42));
    assert!(matches!(heap.decrease_key(5, 6), Err(Error::InvalidArgument(_))));

    // Equal keys are accepted
    heap.decrease_key(9, 9).unwrap();
    assert_eq!(drain(&mut heap), vec![5, 9]);
}

#[test]
fn test_duplicate_identity_is_rejected() {
    let mut heap = BinaryMinHeap::new();
    heap.insert(PriorityItem::new(1, 10u64)).unwrap();
    assert!(matches!(
        heap.insert(PriorityItem::new(1, 3u64)),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(heap.len(), 1);

    let duplicated = vec![PriorityItem::new(4, 1u64), PriorityItem::new(4, 2u64)];
    assert!(BinaryMinHeap::from_vec(duplicated).is_err());
}

#[test]
fn test_empty_heap_errors() {
    let mut heap: BinaryMinHeap<PriorityItem<u64>> = BinaryMinHeap::new();
    assert_eq!(heap.minimum().unwrap_err(), Error::EmptyHeap);
    assert_eq!(heap.extract_min().unwrap_err(), Error::EmptyHeap);
}

#[test]
fn test_from_vec_heapifies() {
    let mut rng = StdRng::seed_from_u64(3);
    let items: Vec<PriorityItem<u64>> = (0..500)
        .map(|id| PriorityItem::new(id, rng.gen_range(0..100)))
        .collect();
    let mut expected: Vec<u64> = items.iter().map(|i| i.distance).collect();
    expected.sort_unstable();

    let mut heap = BinaryMinHeap::from_vec(items).unwrap();
    heap.check_invariants().unwrap();
    assert_eq!(drain(&mut heap), expected);
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0xb1a5);
    let mut heap = BinaryMinHeap::new();
    let mut live: Vec<(usize, u64)> = Vec::new();

    for id in 0..5_000usize {
        match rng.gen_range(0..3) {
            0 => {
                let key = rng.gen_range(0..10_000);
                heap.insert(PriorityItem::new(id, key)).unwrap();
                live.push((id, key));
            }
            1 if !live.is_empty() => {
                let i = rng.gen_range(0..live.len());
                let new_key = rng.gen_range(0..=live[i].1);
                heap.decrease_key(live[i].0, new_key).unwrap();
                live[i].1 = new_key;
            }
            _ if !live.is_empty() => {
                let expected = live.iter().map(|&(_, key)| key).min().unwrap();
                let min = heap.extract_min().unwrap();
                assert_eq!(min.distance, expected);
                let i = live.iter().position(|&(id, _)| id == min.id).unwrap();
                live.swap_remove(i);
            }
            _ => {}
        }
        heap.check_invariants().unwrap();
        assert_eq!(heap.len(), live.len());
    }
}

#[test]
fn test_display() {
    let empty: BinaryMinHeap<PriorityItem<u64>> = BinaryMinHeap::new();
    assert_eq!(empty.to_string(), "<BLANK>\n");

    let heap = BinaryMinHeap::from_vec(vec![item(1), item(2), item(3), item(4)]).unwrap();
    assert_eq!(heap.to_string(), "1 [1]\n> 2 [2]\n>> 4 [4]\n> 3 [3]\n");
}
