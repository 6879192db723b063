//! Property-based tests for the demo building blocks

use proptest::prelude::*;
use tour_demos::pack;
use tour_demos::utils::closure::{encloser, get_text, h1};
use tour_demos::utils::memo::{Memoized, VecBackend};
use tour_demos::utils::natural_range::natural_range;
use tour_demos::utils::protocol::{Exhausted, ItemCursor, Protocol, for_each};

fn fib_iterative(n: usize) -> u128 {
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// *For any* n, the natural range yields exactly 1..=n and then nothing
    #[test]
    fn prop_natural_range_yields_one_through_n(n in 0u64..500) {
        let mut range = natural_range(n);
        prop_assert_eq!(range.size_hint(), (n as usize, Some(n as usize)));

        let values: Vec<u64> = range.by_ref().collect();
        prop_assert_eq!(values, (1..=n).collect::<Vec<_>>());
        prop_assert_eq!(range.next(), None);
    }

    /// *For any* sequence, the cursor visits each element once, in order
    #[test]
    fn prop_cursor_visits_every_element(items in proptest::collection::vec(any::<i32>(), 0..50)) {
        let mut seen = Vec::new();
        let visited = for_each(ItemCursor::new(items.clone()), |item| seen.push(item));

        prop_assert_eq!(visited, items.len());
        prop_assert_eq!(seen, items.clone());

        let mut cursor = ItemCursor::new(items.clone());
        for expected in &items {
            prop_assert_eq!(cursor.next_item(), Ok(*expected));
        }
        prop_assert_eq!(cursor.next_item(), Err(Exhausted));
    }

    /// *For any* number of steps taken, the generator view and the
    /// protocol agree on what is left
    #[test]
    fn prop_generator_matches_remaining(
        items in proptest::collection::vec(any::<u8>(), 0..30),
        steps in 0usize..40,
    ) {
        let mut cursor = ItemCursor::new(items.clone());
        for _ in 0..steps {
            let _ = cursor.next_item();
        }

        let viewed: Vec<u8> = cursor.generator().copied().collect();
        prop_assert_eq!(viewed.len(), cursor.remaining());
        prop_assert!(cursor.position() <= items.len());

        let drained: Vec<u8> = cursor.collect();
        prop_assert_eq!(viewed, drained);
    }

    /// *For any* a and b, encloser(a)(b) == a + b, independent of other closures
    #[test]
    fn prop_encloser_adds(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let first = encloser(a);
        let other = encloser(b);
        prop_assert_eq!(first(b), a + b);
        prop_assert_eq!(other(a), a + b);
        prop_assert_eq!(first(b), a + b);
    }

    /// *For any* name, decorating wraps the base text once per application
    #[test]
    fn prop_h1_wraps_once_per_application(name in "[A-Za-z ]{0,12}") {
        let once = h1(get_text);
        let twice = h1(h1(get_text));
        prop_assert_eq!(once(name.as_str()), format!("<h1>Hello, {name}!</h1>"));
        prop_assert_eq!(twice(name.as_str()), format!("<h1><h1>Hello, {name}!</h1></h1>"));
    }

    /// *For any* index, the memoized recursion agrees with the iterative one
    #[test]
    fn prop_memoized_fibonacci_matches_iterative(n in 0usize..180) {
        let fib = Memoized::with_backend(
            VecBackend::new(),
            |fib: &dyn Fn(&usize) -> u128, n: &usize| {
                if *n <= 1 { *n as u128 } else { fib(&(n - 1)) + fib(&(n - 2)) }
            },
        );
        prop_assert_eq!(fib.get(&n), fib_iterative(n));
        // fib(1) is a base case and never touches fib(0)
        let expected_cached = if n == 1 { 1 } else { n + 1 };
        prop_assert_eq!(fib.cached(), expected_cached);
    }

    /// *For any* values, literal packing and unpacking give the same call
    #[test]
    fn prop_pack_and_unpack_agree(a in any::<i16>(), b in any::<i16>(), x in any::<i16>()) {
        let literal = pack!(a, b; x = x);
        let unpacked = pack!(*vec![a, b], **[("x", x)]);
        prop_assert_eq!(literal.values().collect::<Vec<_>>(), unpacked.values().collect::<Vec<_>>());
        prop_assert_eq!(literal, unpacked);
    }
}
