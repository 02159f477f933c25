//! Replays random operation sequences against `std::vec::Vec` and compares results.

use simple_vector::{SimpleVector, reserve};

fn check(v: &SimpleVector<u32>, model: &[u32]) {
    assert_eq!(v.as_slice(), model);
    assert_eq!(v.len(), model.len());
    assert!(v.len() <= v.capacity());
}

#[test]
fn test_random_operations_match_vec() {
    fastrand::seed(8347261);
    for _ in 0..50 {
        let mut v = SimpleVector::<u32>::new();
        let mut model = Vec::<u32>::new();
        for _ in 0..400 {
            match fastrand::u8(0..10) {
                0..=2 => {
                    let x = fastrand::u32(..);
                    v.push_back(x);
                    model.push(x);
                }
                3 => {
                    assert_eq!(v.pop_back(), model.pop());
                }
                4 => {
                    let pos = fastrand::usize(0..=model.len());
                    let x = fastrand::u32(..1000);
                    assert_eq!(v.insert(pos, x), pos);
                    model.insert(pos, x);
                }
                5 if !model.is_empty() => {
                    let pos = fastrand::usize(0..model.len());
                    assert_eq!(v.erase(pos), pos);
                    model.remove(pos);
                }
                6 => {
                    let capacity = v.capacity();
                    let new_len = fastrand::usize(0..64);
                    v.resize(new_len);
                    model.resize(new_len, 0);
                    if new_len <= capacity {
                        assert_eq!(v.capacity(), capacity);
                    } else {
                        assert_eq!(v.capacity(), new_len.max(capacity * 2));
                    }
                }
                7 => {
                    let capacity = v.capacity();
                    let requested = fastrand::usize(0..128);
                    v.reserve(requested);
                    assert_eq!(v.capacity(), capacity.max(requested));
                }
                8 => {
                    let i = fastrand::usize(0..model.len() + 2);
                    match model.get(i) {
                        Some(expected) => assert_eq!(v.at(i).unwrap(), expected),
                        None => assert!(v.at(i).unwrap_err().is_out_of_range()),
                    }
                }
                _ => {
                    let copy = v.clone();
                    assert_eq!(copy, v);
                    assert_eq!(copy.capacity(), copy.len());
                }
            }
            check(&v, &model);
        }
    }
}

#[test]
fn test_push_back_reallocations_are_logarithmic() {
    for k in [1usize, 2, 3, 7, 64, 100, 1000, 4097] {
        let mut v = SimpleVector::new();
        let mut reallocations = 0;
        let mut capacity = v.capacity();
        for i in 0..k {
            v.push_back(i);
            if v.capacity() != capacity {
                reallocations += 1;
                capacity = v.capacity();
            }
        }
        let bound = (k as f64).log2().ceil() as usize + 1;
        assert!(reallocations <= bound, "k={k}: {reallocations} > {bound}");
        assert!(v.capacity() >= k);
    }
}

#[test]
fn test_insert_then_erase_restores_original() {
    fastrand::seed(551);
    for _ in 0..100 {
        let len = fastrand::usize(0..20);
        let original: SimpleVector<u32> = (0..len as u32).collect();
        let mut v = original.clone();
        let pos = fastrand::usize(0..=len);
        let inserted = v.insert(pos, fastrand::u32(..));
        v.erase(inserted);
        assert_eq!(v, original);
    }
}

#[test]
fn test_resize_round_trips() {
    let mut v = SimpleVector::<u32>::with_len(10);
    let capacity = v.capacity();
    v.resize(4);
    assert_eq!(v.capacity(), capacity);
    assert_eq!(v.len(), 4);

    let mut w = SimpleVector::<u32>::with_reserve(reserve(3));
    w.resize(7);
    let snapshot = (w.clone(), w.capacity());
    w.resize(7);
    assert_eq!(w, snapshot.0);
    assert_eq!(w.capacity(), snapshot.1);
}

#[test]
fn test_copy_independence() {
    fastrand::seed(90210);
    let a: SimpleVector<u32> = (0..50).map(|_| fastrand::u32(..)).collect();
    let frozen: Vec<u32> = a.iter().copied().collect();
    let mut b = a.clone();
    assert_eq!(a, b);
    for _ in 0..30 {
        let i = fastrand::usize(0..b.len());
        b[i] = b[i].wrapping_add(1);
        b.push_back(fastrand::u32(..));
    }
    b.erase(0);
    assert_eq!(a, frozen);
}

#[test]
fn test_move_leaves_source_empty() {
    let mut a: SimpleVector<String> = ["p", "q", "r"].into_iter().map(String::from).collect();
    let b = a.take();
    assert_eq!(b, ["p", "q", "r"].map(String::from));
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);

    let mut c = SimpleVector::new();
    let mut d = b;
    c.move_from(&mut d);
    assert_eq!(c.len(), 3);
    assert!(d.is_empty());
}

#[test]
fn test_ordering_matches_slices() {
    fastrand::seed(4242);
    for _ in 0..500 {
        let x: SimpleVector<u8> = (0..fastrand::usize(0..5)).map(|_| fastrand::u8(0..3)).collect();
        let y: SimpleVector<u8> = (0..fastrand::usize(0..5)).map(|_| fastrand::u8(0..3)).collect();
        assert_eq!(x.cmp(&y), x.as_slice().cmp(y.as_slice()));
        assert_eq!(x == y, x.as_slice() == y.as_slice());
        assert_eq!(x < y, !(x >= y));
        assert_eq!(x > y, y < x);
        assert_eq!(x <= y, !(y < x));
    }
}
