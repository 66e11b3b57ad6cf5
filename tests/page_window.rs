use datadeck::query::{page_window, MAX_VISIBLE_PAGES};

#[test]
fn shows_every_page_when_five_or_fewer() {
    let window = page_window(2, 4);

    assert_eq!(window.pages, vec![1, 2, 3, 4]);
    assert!(!window.first_anchor);
    assert!(!window.leading_gap);
    assert!(!window.last_anchor);
    assert!(!window.trailing_gap);
}

#[test]
fn empty_when_there_are_no_pages() {
    let window = page_window(1, 0);
    assert!(window.pages.is_empty());
}

#[test]
fn clamps_to_front_near_the_start() {
    let window = page_window(2, 9);

    assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
    assert!(!window.first_anchor);
    assert!(window.last_anchor);
    assert!(window.trailing_gap);
}

#[test]
fn clamps_to_back_near_the_end() {
    let window = page_window(8, 9);

    assert_eq!(window.pages, vec![5, 6, 7, 8, 9]);
    assert!(window.first_anchor);
    assert!(window.leading_gap);
    assert!(!window.last_anchor);
}

#[test]
fn centers_on_the_current_page_in_the_middle() {
    let window = page_window(5, 9);

    assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
    assert!(window.first_anchor);
    assert!(window.leading_gap);
    assert!(window.last_anchor);
    assert!(window.trailing_gap);
}

#[test]
fn adjacent_anchor_has_no_gap() {
    // Window starts at page 2: page 1 gets an anchor but no ellipsis.
    let window = page_window(4, 20);

    assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
    assert!(window.first_anchor);
    assert!(!window.leading_gap);
}

#[test]
fn never_exceeds_the_cap_and_always_contains_current() {
    for total in 1..=30u64 {
        for current in 1..=total {
            let window = page_window(current, total);
            assert!(
                window.pages.len() as u64 <= MAX_VISIBLE_PAGES,
                "window too wide for page {current} of {total}"
            );
            assert!(
                window.pages.contains(&current),
                "window missing current page {current} of {total}"
            );
            let contiguous = window
                .pages
                .windows(2)
                .all(|pair| pair[1] == pair[0] + 1);
            assert!(contiguous, "window not contiguous for {current} of {total}");
        }
    }
}
