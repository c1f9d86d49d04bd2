use storefront_core::{NavIntent, NavOutcome, Paginator, ScrollDirection, CAPACITY};

fn paginator_at(index: usize) -> Paginator {
    let mut pager = Paginator::new();
    for _ in 0..index {
        pager.navigate(NavIntent::Next);
    }
    assert_eq!(pager.current_index(), index);
    pager
}

#[test]
fn starts_at_first_card() {
    let pager = Paginator::new();
    assert_eq!(pager.current_index(), 0);
    assert_eq!(pager.capacity(), CAPACITY);
}

#[test]
fn next_from_middle_advances() {
    let mut pager = paginator_at(3);

    let outcome = pager.navigate(NavIntent::Next);

    assert_eq!(
        outcome,
        NavOutcome::Advance {
            index: 4,
            direction: ScrollDirection::Down
        }
    );
    assert_eq!(pager.current_index(), 4);
}

#[test]
fn previous_from_middle_advances_upwards() {
    let mut pager = paginator_at(5);

    let outcome = pager.navigate(NavIntent::Previous);

    assert_eq!(
        outcome,
        NavOutcome::Advance {
            index: 4,
            direction: ScrollDirection::Up
        }
    );
}

#[test]
fn next_on_last_card_bounces() {
    let mut pager = paginator_at(9);

    let outcome = pager.navigate(NavIntent::Next);

    assert_eq!(
        outcome,
        NavOutcome::Bounce {
            direction: ScrollDirection::Down
        }
    );
    assert_eq!(pager.current_index(), 9);
}

#[test]
fn previous_on_first_card_bounces() {
    let mut pager = Paginator::new();

    let outcome = pager.navigate(NavIntent::Previous);

    assert_eq!(
        outcome,
        NavOutcome::Bounce {
            direction: ScrollDirection::Up
        }
    );
    assert_eq!(pager.current_index(), 0);
}

#[test]
fn index_stays_in_bounds_under_any_input_sequence() {
    let mut pager = Paginator::new();
    let pattern = [
        NavIntent::Previous,
        NavIntent::Next,
        NavIntent::Next,
        NavIntent::Previous,
        NavIntent::Next,
    ];
    for step in 0..200 {
        pager.navigate(pattern[step % pattern.len()]);
        assert!(pager.current_index() < CAPACITY);
    }
    for _ in 0..50 {
        pager.navigate(NavIntent::Next);
    }
    assert_eq!(pager.current_index(), CAPACITY - 1);
}
