use crate::host::{ListChild, ListHost};
use cranpose_ui_graphics::{DrawScope, IntEdgeInsets};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Adds offsets around list cells and draws before or after the cells.
///
/// The host calls [`ItemDecoration::item_offsets`] for every cell it lays out,
/// [`ItemDecoration::draw`] before drawing cells and
/// [`ItemDecoration::draw_over`] once per frame after them.
pub trait ItemDecoration {
    fn item_offsets(&mut self, _child: &ListChild, _host: &dyn ListHost) -> IntEdgeInsets {
        IntEdgeInsets::ZERO
    }

    fn draw(&mut self, _scope: &mut dyn DrawScope, _host: &dyn ListHost) {}

    fn draw_over(&mut self, _scope: &mut dyn DrawScope, _host: &dyn ListHost) {}
}

/// Shared decorations stay reachable by their owner, e.g. to call
/// `invalidate` on a sticky decoration the list is using.
impl<T: ItemDecoration + ?Sized> ItemDecoration for Rc<RefCell<T>> {
    fn item_offsets(&mut self, child: &ListChild, host: &dyn ListHost) -> IntEdgeInsets {
        self.borrow_mut().item_offsets(child, host)
    }

    fn draw(&mut self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        self.borrow_mut().draw(scope, host)
    }

    fn draw_over(&mut self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        self.borrow_mut().draw_over(scope, host)
    }
}

/// Ordered set of decorations attached to one list.
///
/// Offsets of all members are summed; drawing runs in insertion order so
/// later decorations paint on top.
#[derive(Default)]
pub struct ItemDecorations {
    decorations: SmallVec<[Box<dyn ItemDecoration>; 2]>,
}

impl ItemDecorations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, decoration: impl ItemDecoration + 'static) {
        self.decorations.push(Box::new(decoration));
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn ItemDecoration>> {
        (index < self.decorations.len()).then(|| self.decorations.remove(index))
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }
}

impl ItemDecoration for ItemDecorations {
    fn item_offsets(&mut self, child: &ListChild, host: &dyn ListHost) -> IntEdgeInsets {
        let mut total = IntEdgeInsets::ZERO;
        for decoration in &mut self.decorations {
            total += decoration.item_offsets(child, host);
        }
        total
    }

    fn draw(&mut self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        for decoration in &mut self.decorations {
            decoration.draw(scope, host);
        }
    }

    fn draw_over(&mut self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        for decoration in &mut self.decorations {
            decoration.draw_over(scope, host);
        }
    }
}

impl std::fmt::Debug for ItemDecorations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDecorations")
            .field("len", &self.decorations.len())
            .finish()
    }
}
