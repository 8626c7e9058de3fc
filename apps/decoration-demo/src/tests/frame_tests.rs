use super::*;
use cranpose_decoration::{SpaceItemDecoration, StickyItemDecoration};
use cranpose_ui_graphics::IntSize;

fn contacts() -> ContactList {
    ContactList::new(
        ["bob", "alice", "amy", "carl", "bea", "cid", "dan", "ann"],
        IntSize::new(120, 200),
    )
}

#[test]
fn section_starts_follow_initials() {
    let list = contacts();
    let sticky: Vec<usize> = (0..8).filter(|&p| list.is_sticky_position(p)).collect();
    // alice amy ann | bea bob | carl cid | dan
    assert_eq!(sticky, vec![0, 3, 5, 7]);
}

#[test]
fn first_frame_has_pinned_header_and_rows() {
    let mut list = contacts();
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);
    let frame = render_frame(&list, &mut sticky).expect("frame");

    assert_eq!(frame.pixel(100, 2), Some(HEADER_COLOR.to_rgba_u8()));
    assert_eq!(frame.pixel(100, 30), Some(ROW_COLOR.to_rgba_u8()));
}

#[test]
fn spacing_leaves_background_between_rows() {
    let mut list = contacts();
    let mut spacing = SpaceItemDecoration::new(10);
    list.layout(&mut spacing);
    let frame = render_frame(&list, &mut spacing).expect("frame");

    // Row 0 spans 10..50, row 1 starts at 60.
    assert_eq!(frame.pixel(60, 5), Some(Color::WHITE.to_rgba_u8()));
    assert_eq!(frame.pixel(60, 20), Some(ROW_COLOR.to_rgba_u8()));
    assert_eq!(frame.pixel(60, 55), Some(Color::WHITE.to_rgba_u8()));
    assert_eq!(frame.pixel(5, 20), Some(Color::WHITE.to_rgba_u8()));
}

#[test]
fn ascii_preview_marks_headers_and_rows() {
    let mut list = contacts();
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);
    let frame = render_frame(&list, &mut sticky).expect("frame");
    let preview = ascii_preview(&frame, 20);
    let lines: Vec<&str> = preview.lines().collect();

    assert_eq!(lines.len(), 10);
    assert!(lines[0].ends_with('#'));
    assert!(lines[2].contains('='));
}
