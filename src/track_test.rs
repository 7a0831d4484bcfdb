#![allow(clippy::float_cmp)]

use super::*;

fn measured(count: usize, width: f64) -> Track {
    let mut track = Track::new(count);
    track.set_metrics(Metrics { host_width: width, first_slide_width: width });
    track
}

// =============================================================
// move_to
// =============================================================

#[test]
fn new_track_starts_at_zero_without_phantoms() {
    let track = Track::new(4);
    assert_eq!(track.current(), 0);
    assert_eq!(track.slide_count(), 4);
    assert_eq!(track.phantoms(), Phantoms::default());
    assert_eq!(track.pane_left(), 0.0);
}

#[test]
fn move_to_in_range_does_not_wrap() {
    let mut track = Track::new(4);
    assert_eq!(track.move_to(2), Wrap::None);
    assert_eq!(track.current(), 2);
}

#[test]
fn move_before_first_wraps_to_last() {
    let mut track = Track::new(4);
    assert_eq!(track.move_to(-1), Wrap::Prepend);
    assert_eq!(track.current(), 3);
}

#[test]
fn move_past_last_wraps_to_first() {
    let mut track = Track::new(4);
    track.move_to(3);
    assert_eq!(track.move_to(4), Wrap::Append);
    assert_eq!(track.current(), 0);
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn resting_offset_is_index_times_host_width() {
    let mut track = measured(5, 200.0);
    track.move_to(3);
    assert_eq!(track.resting_offset(), -600.0);
}

#[test]
fn append_target_slides_one_past_the_last() {
    let mut track = measured(5, 200.0);
    track.move_to(4);
    let wrap = track.move_to(5);
    assert_eq!(track.target_offset(wrap), -1000.0);
}

#[test]
fn prepend_target_undoes_the_left_shift() {
    let mut track = measured(5, 200.0);
    track.sync_phantoms();
    assert_eq!(track.pane_left(), -200.0);
    let wrap = track.move_to(-1);
    assert_eq!(track.target_offset(wrap), 200.0);
}

#[test]
fn plain_target_matches_resting_offset() {
    let mut track = measured(3, 120.0);
    let wrap = track.move_to(1);
    assert_eq!(track.target_offset(wrap), track.resting_offset());
}

// =============================================================
// Phantom edges
// =============================================================

#[test]
fn index_zero_gets_only_leading_phantom() {
    let mut track = measured(3, 100.0);
    assert_eq!(track.sync_phantoms(), vec![EdgeChange::InsertLeading]);
    assert_eq!(track.phantoms(), Phantoms { leading: true, trailing: false });
    assert_eq!(track.pane_left(), -100.0);
}

#[test]
fn sync_is_idempotent() {
    let mut track = measured(3, 100.0);
    track.sync_phantoms();
    assert!(track.sync_phantoms().is_empty());
    assert_eq!(track.phantoms(), Phantoms { leading: true, trailing: false });
}

#[test]
fn leaving_zero_removes_leading_phantom_and_resets_left() {
    let mut track = measured(3, 100.0);
    track.sync_phantoms();
    track.move_to(1);
    assert_eq!(track.sync_phantoms(), vec![EdgeChange::RemoveLeading]);
    assert_eq!(track.pane_left(), 0.0);
    assert_eq!(track.phantoms(), Phantoms::default());
}

#[test]
fn last_index_gets_trailing_phantom() {
    let mut track = measured(3, 100.0);
    track.sync_phantoms();
    track.move_to(2);
    assert_eq!(track.sync_phantoms(), vec![EdgeChange::RemoveLeading, EdgeChange::AppendTrailing]);
    assert_eq!(track.phantoms(), Phantoms { leading: false, trailing: true });
}

#[test]
fn wrapping_to_zero_swaps_trailing_for_leading() {
    let mut track = measured(3, 100.0);
    track.move_to(2);
    track.sync_phantoms();
    track.move_to(3);
    assert_eq!(track.sync_phantoms(), vec![EdgeChange::InsertLeading, EdgeChange::RemoveTrailing]);
    assert_eq!(track.phantoms(), Phantoms { leading: true, trailing: false });
}

#[test]
fn single_slide_has_both_phantoms() {
    let mut track = measured(1, 100.0);
    assert_eq!(track.sync_phantoms(), vec![EdgeChange::InsertLeading, EdgeChange::AppendTrailing]);
    assert_eq!(track.phantoms(), Phantoms { leading: true, trailing: true });
}

#[test]
fn two_slides_alternate_edges() {
    let mut track = measured(2, 100.0);
    track.sync_phantoms();
    track.move_to(1);
    track.sync_phantoms();
    assert_eq!(track.phantoms(), Phantoms { leading: false, trailing: true });
    track.move_to(2);
    track.sync_phantoms();
    assert_eq!(track.phantoms(), Phantoms { leading: true, trailing: false });
}

// =============================================================
// Layout
// =============================================================

#[test]
fn layout_width_excludes_phantoms() {
    let mut track = measured(4, 250.0);
    track.sync_phantoms();
    let layout = track.layout();
    assert_eq!(layout.width, 1000.0);
    assert_eq!(layout.left, Some(-250.0));
    assert_eq!(layout.offset, 0.0);
}

#[test]
fn layout_without_leading_phantom_leaves_left_alone() {
    let mut track = measured(4, 250.0);
    track.move_to(2);
    track.sync_phantoms();
    let layout = track.layout();
    assert_eq!(layout.left, None);
    assert_eq!(layout.offset, -500.0);
}

#[test]
fn layout_picks_up_new_measurements() {
    let mut track = measured(2, 100.0);
    track.sync_phantoms();
    track.set_metrics(Metrics { host_width: 300.0, first_slide_width: 300.0 });
    let layout = track.layout();
    assert_eq!(layout.left, Some(-300.0));
    assert_eq!(track.pane_left(), -300.0);
    assert_eq!(layout.width, 600.0);
}
