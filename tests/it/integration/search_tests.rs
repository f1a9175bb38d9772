//! Search-as-you-type debounce behavior.

use crate::helpers::{ms, t0};
use filedrive_ui::search::SearchBox;

#[test]
fn test_single_character_does_not_auto_submit() {
    let start = t0();
    let mut search = SearchBox::new();

    search.input("a", start);
    assert!(!search.poll(start + ms(500)));
    assert!(!search.poll(start + ms(2000)));
}

#[test]
fn test_cleared_query_auto_submits() {
    let start = t0();
    let mut search = SearchBox::new();

    search.input("", start);
    assert!(!search.poll(start + ms(499)));
    assert!(search.poll(start + ms(500)));
}

#[test]
fn test_two_characters_auto_submit() {
    let start = t0();
    let mut search = SearchBox::new();

    search.input("ab", start);
    assert!(search.poll(start + ms(500)));
    // Fired once; nothing pending afterwards.
    assert!(!search.poll(start + ms(1000)));
}

#[test]
fn test_keystroke_burst_submits_once_with_final_query() {
    let start = t0();
    let mut search = SearchBox::new();

    search.input("r", start);
    search.input("re", start + ms(200));
    search.input("rep", start + ms(400));

    // The first two deadlines were replaced.
    assert!(!search.poll(start + ms(500)));
    assert!(!search.poll(start + ms(700)));
    assert!(search.poll(start + ms(900)));
    assert_eq!(search.query(), "rep");
}

#[test]
fn test_escape_clears_but_pending_timer_fires_with_empty_query() {
    let start = t0();
    let mut search = SearchBox::new();
    search.focus();

    search.input("ab", start);
    search.clear_and_blur();

    assert_eq!(search.query(), "");
    assert!(!search.is_focused());
    // The debounce was not cancelled; it fires with the cleared value,
    // which the empty-query rule permits.
    assert!(search.poll(start + ms(500)));
}

#[test]
fn test_focus_tracking() {
    let mut search = SearchBox::new();
    assert!(!search.is_focused());
    search.focus();
    assert!(search.is_focused());
    search.blur();
    assert!(!search.is_focused());
}
