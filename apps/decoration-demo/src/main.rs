use anyhow::Context;
use cranpose_decoration::{ItemDecorations, ListHost, SpaceItemDecoration, StickyItemDecoration};
use cranpose_ui_graphics::{Dp, IntSize};
use decoration_demo::{ascii_preview, render_frame, ContactList};
use std::cell::RefCell;
use std::rc::Rc;

const NAMES: &[&str] = &[
    "Ada", "Alan", "Alonzo", "Barbara", "Bjarne", "Brian", "Claude", "Dennis", "Donald",
    "Edsger", "Frances", "Grace", "Guido", "John", "Ken", "Larry", "Linus", "Margaret",
];
const SCROLL_STEPS: &[i32] = &[0, 90, 150, 170, 400];
const DENSITY: f32 = 1.0;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Cranpose Decoration Demo ===");
    println!("'#' sticky header, '=' row, blank background");
    println!();

    let mut list = ContactList::new(NAMES.iter().copied(), IntSize::new(240, 200));
    let sticky = Rc::new(RefCell::new(StickyItemDecoration::new()));
    let mut decorations = ItemDecorations::new();
    decorations.push(SpaceItemDecoration::from_dp(Dp(6.0), DENSITY));
    decorations.push(Rc::clone(&sticky));

    for &scroll in SCROLL_STEPS {
        show_frame(&mut list, &mut decorations, scroll)?;
    }

    log::info!("replacing data set, dropping cached headers");
    list.set_names(NAMES.iter().copied().chain(["Alice", "Bob", "Carol"]));
    sticky.borrow_mut().invalidate();
    show_frame(&mut list, &mut decorations, 150)?;

    log::info!("{:?}", sticky.borrow());
    Ok(())
}

fn show_frame(
    list: &mut ContactList,
    decorations: &mut ItemDecorations,
    scroll: i32,
) -> anyhow::Result<()> {
    list.scroll_to(scroll);
    list.layout(decorations);
    let frame = render_frame(list, decorations)
        .with_context(|| format!("rendering frame at scroll {scroll}"))?;

    let first = list
        .child_at(0)
        .and_then(|child| list.name(child.layout_position))
        .unwrap_or("-");
    println!("scroll {scroll:>4}  first visible: {first}");
    print!("{}", ascii_preview(&frame, 10));
    println!();
    Ok(())
}
