use super::*;
use cranpose_ui_graphics::{Color, DrawScope};

struct Banner {
    height: f32,
    placed: Option<Rect>,
}

impl LayoutElement for Banner {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let (width, height) = constraints.constrain(constraints.max_width, self.height);
        Size::new(width, height)
    }

    fn place(&mut self, bounds: Rect) {
        self.placed = Some(bounds);
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        let size = scope.size();
        scope.draw_rect(Color::BLUE);
        scope.draw_rect_at(
            Rect {
                x: 0.0,
                y: 0.0,
                width: size.width / 2.0,
                height: size.height,
            },
            Color::RED,
        );
    }
}

#[test]
fn element_is_measured_to_full_width_and_wrapped_height() {
    let mut banner = Banner {
        height: 12.0,
        placed: None,
    };
    let bitmap = rasterize(&mut banner, Constraints::fill_width_wrap_height(40.0, 100.0))
        .expect("rasterized");
    assert_eq!((bitmap.width(), bitmap.height()), (40, 12));
    assert_eq!(banner.placed, Some(Rect::from_size(Size::new(40.0, 12.0))));
    assert_eq!(bitmap.pixel(5, 5), Some([255, 0, 0, 255]));
    assert_eq!(bitmap.pixel(30, 11), Some([0, 0, 255, 255]));
}

#[test]
fn height_is_capped_by_constraints() {
    let mut banner = Banner {
        height: 500.0,
        placed: None,
    };
    let bitmap = rasterize(&mut banner, Constraints::fill_width_wrap_height(10.0, 80.0))
        .expect("rasterized");
    assert_eq!(bitmap.height(), 80);
}

#[test]
fn zero_height_element_is_rejected() {
    let mut banner = Banner {
        height: 0.0,
        placed: None,
    };
    let err = rasterize(&mut banner, Constraints::fill_width_wrap_height(10.0, 80.0))
        .expect_err("empty element");
    assert_eq!(
        err,
        RasterizeError::InvalidSize {
            width: 10.0,
            height: 0.0
        }
    );
    assert!(banner.placed.is_none());
}
