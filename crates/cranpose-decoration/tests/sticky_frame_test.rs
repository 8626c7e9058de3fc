//! Sticky headers over a scrolled list: offsets, pinning, push-off and pixels.

use cranpose_decoration::prelude::*;
use cranpose_render_pixels::BitmapCanvas;
use cranpose_testing::prelude::*;
use cranpose_ui_graphics::{Color, DrawScopeDefault, ImageBitmap, IntEdgeInsets, Size};
use std::cell::RefCell;
use std::rc::Rc;

const HEADER: i32 = 24;

/// 200x300 list of 40px rows with sections starting at 0, 5 and 10.
fn sectioned_list() -> TestList {
    TestList::vertical(200, 300)
        .with_items(20, 40)
        .with_sections(TestSections::new([0, 5, 10], HEADER as f32))
}

fn draw_frame(list: &TestList, decoration: &mut dyn ItemDecoration) -> Vec<DrawnImage> {
    let mut scope = DrawScopeDefault::new(Size::new(200.0, 300.0));
    decoration.draw_over(&mut scope, list);
    drawn_images(&scope)
}

#[test]
fn section_starts_are_pushed_down_by_their_header() {
    let mut list = sectioned_list();
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);

    assert_eq!(list.offsets()[0], IntEdgeInsets::top(HEADER));
    assert_eq!(list.offsets()[1], IntEdgeInsets::ZERO);
    assert_eq!(list.offsets()[5], IntEdgeInsets::top(HEADER));
    assert_eq!(list.child_for_position(0).expect("row 0").bounds.top, HEADER);
    assert_eq!(sticky.cached_positions(), vec![0, 5, 10]);
    assert_eq!(list.sections().expect("sections").created(), 3);
}

#[test]
fn unscrolled_list_pins_the_first_header() {
    let mut list = sectioned_list();
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);

    let images = draw_frame(&list, &mut sticky);
    assert_eq!(images.len(), 3);
    assert_image_at(&images, 0.0, 0.0, HEADER, "header above row 0");
    assert_image_at(&images, 0.0, 224.0, HEADER, "header above row 5");
}

#[test]
fn header_of_current_section_stays_pinned() {
    let mut list = sectioned_list();
    let mut sticky = StickyItemDecoration::new();
    list.scroll_to(120);
    list.layout(&mut sticky);

    assert_eq!(list.children()[0].layout_position, 2);
    let images = draw_frame(&list, &mut sticky);
    assert_image_at(&images, 0.0, 0.0, HEADER, "pinned section 0 header");
}

#[test]
fn next_section_pushes_pinned_header_off() {
    let mut list = sectioned_list();
    let mut sticky = StickyItemDecoration::new();
    list.scroll_to(210);
    list.layout(&mut sticky);

    // Row 4 spans -26..14, row 5's header 14..38.
    assert_eq!(list.children()[0].layout_position, 4);
    let images = draw_frame(&list, &mut sticky);
    assert_eq!(images.len(), 3);
    assert_image_at(&images, 0.0, 14.0, HEADER, "incoming section 5 header");
    assert_image_at(&images, 0.0, 238.0, HEADER, "section 10 header");
    assert_image_at(&images, 0.0, -10.0, HEADER, "outgoing section 0 header");
}

#[test]
fn pushed_header_pixels_meet_incoming_header() {
    let mut list = TestList::vertical(200, 300)
        .with_items(20, 40)
        .with_sections(TestSections::new([0, 5, 10], HEADER as f32).with_color(Color::RED));
    let mut sticky = StickyItemDecoration::new();
    list.scroll_to(210);
    list.layout(&mut sticky);

    let mut frame = ImageBitmap::filled(200, 300, Color::WHITE).expect("frame");
    sticky.draw_over(&mut BitmapCanvas::new(&mut frame), &list);

    assert_eq!(frame.pixel(100, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(100, 13), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(100, 37), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(100, 38), Some([255, 255, 255, 255]));
}

#[test]
fn header_height_is_capped_by_list_height_minus_padding() {
    let mut list = TestList::vertical(100, 120)
        .with_padding(IntEdgeInsets::new(0, 30, 0, 30))
        .with_items(3, 40)
        .with_sections(TestSections::new([0], 500.0));
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);

    let bitmap = sticky.cached_bitmap(0).expect("header");
    assert_eq!(bitmap.width(), 100);
    assert_eq!(bitmap.height(), 60);
}

#[test]
fn stale_headers_are_drawn_until_invalidated() {
    let mut list = sectioned_list();
    let sticky = Rc::new(RefCell::new(StickyItemDecoration::new()));
    let mut decorations = ItemDecorations::new();
    decorations.push(Rc::clone(&sticky));
    list.layout(&mut decorations);

    list.sections().expect("sections").set_starts([0]);
    list.layout(&mut decorations);
    assert_eq!(list.offsets()[5], IntEdgeInsets::ZERO);
    let images = draw_frame(&list, &mut decorations);
    assert_image_at(&images, 0.0, 200.0, HEADER, "cached header for old section 5");

    sticky.borrow_mut().invalidate();
    list.layout(&mut decorations);
    assert_eq!(sticky.borrow().cached_positions(), vec![0]);
    assert_eq!(draw_frame(&list, &mut decorations).len(), 2);
}

#[test]
fn combined_decorations_sum_their_offsets() {
    let mut list = sectioned_list();
    let mut decorations = ItemDecorations::new();
    decorations.push(SpaceItemDecoration::new(10));
    decorations.push(StickyItemDecoration::new());
    assert_eq!(decorations.len(), 2);
    list.layout(&mut decorations);

    assert_eq!(list.offsets()[0], IntEdgeInsets::new(10, 10 + HEADER, 10, 5));
    assert_eq!(list.offsets()[1], IntEdgeInsets::new(10, 5, 10, 5));

    assert!(decorations.remove(5).is_none());
    assert!(decorations.remove(0).is_some());
    list.layout(&mut decorations);
    assert_eq!(list.offsets()[0], IntEdgeInsets::top(HEADER));
}

#[test]
fn list_without_sections_is_left_alone() {
    let mut list = TestList::vertical(200, 300).with_items(10, 40);
    let mut sticky = StickyItemDecoration::new();
    list.layout(&mut sticky);

    assert!(list.offsets().iter().all(IntEdgeInsets::is_zero));
    assert_eq!(sticky.cache_len(), 0);
    assert!(draw_frame(&list, &mut sticky).is_empty());
}
