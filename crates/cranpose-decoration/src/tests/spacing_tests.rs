use super::*;
use cranpose_ui_graphics::IntRect;

fn child(position: usize) -> ListChild {
    ListChild::new(position, IntRect::default())
}

#[test]
fn grid_cell_in_second_row_matches_worked_example() {
    let decoration = SpaceItemDecoration::new(30);
    let insets = decoration.offsets_for(LayoutStrategy::grid(3), &child(4));
    assert_eq!(insets, IntEdgeInsets::new(20, 0, 20, 30));
}

#[test]
fn grid_neighbours_share_one_space_unit() {
    let decoration = SpaceItemDecoration::new(30);
    let strategy = LayoutStrategy::grid(3);
    for row_start in [0, 3, 6] {
        for column in 0..2 {
            let current = decoration.offsets_for(strategy, &child(row_start + column));
            let next = decoration.offsets_for(strategy, &child(row_start + column + 1));
            assert_eq!(current.right + next.left, 30, "column {column}");
        }
    }
}

#[test]
fn grid_truncation_loses_at_most_one_pixel_per_gap() {
    let decoration = SpaceItemDecoration::new(10);
    let strategy = LayoutStrategy::grid(3);
    for position in 0..2 {
        let current = decoration.offsets_for(strategy, &child(position));
        let next = decoration.offsets_for(strategy, &child(position + 1));
        let gap = current.right + next.left;
        assert!((9..=10).contains(&gap), "gap {gap}");
    }
}

#[test]
fn only_first_grid_row_gets_top_space() {
    let decoration = SpaceItemDecoration::new(12);
    let strategy = LayoutStrategy::grid(4);
    for position in 0..12 {
        let insets = decoration.offsets_for(strategy, &child(position));
        let expected_top = if position < 4 { 12 } else { 0 };
        assert_eq!(insets.top, expected_top, "position {position}");
        assert_eq!(insets.bottom, 12, "position {position}");
    }
}

#[test]
fn grid_uses_adapter_position() {
    let decoration = SpaceItemDecoration::new(30);
    let moved = ListChild {
        adapter_position: 4,
        layout_position: 0,
        bounds: IntRect::default(),
    };
    assert_eq!(
        decoration.offsets_for(LayoutStrategy::grid(3), &moved),
        IntEdgeInsets::new(20, 0, 20, 30)
    );
}

#[test]
fn staggered_grid_follows_grid_formula() {
    let decoration = SpaceItemDecoration::new(20);
    let staggered = LayoutStrategy::staggered_grid(2, Orientation::Vertical);
    let grid = LayoutStrategy::grid(2);
    for position in 0..6 {
        assert_eq!(
            decoration.offsets_for(staggered, &child(position)),
            decoration.offsets_for(grid, &child(position))
        );
    }
    assert_eq!(
        decoration.offsets_for(staggered, &child(1)),
        IntEdgeInsets::new(10, 20, 20, 20)
    );
}

#[test]
fn zero_span_grid_behaves_as_single_column() {
    let decoration = SpaceItemDecoration::new(8);
    let strategy = LayoutStrategy::Grid { span_count: 0 };
    assert_eq!(
        decoration.offsets_for(strategy, &child(2)),
        IntEdgeInsets::new(8, 0, 8, 8)
    );
}

#[test]
fn vertical_list_shares_gaps_between_rows() {
    let decoration = SpaceItemDecoration::new(16);
    let strategy = LayoutStrategy::vertical();
    assert_eq!(
        decoration.offsets_for(strategy, &child(0)),
        IntEdgeInsets::new(16, 16, 16, 8)
    );
    for position in 1..5 {
        assert_eq!(
            decoration.offsets_for(strategy, &child(position)),
            IntEdgeInsets::new(16, 8, 16, 8)
        );
    }
}

#[test]
fn horizontal_list_shares_gaps_between_columns() {
    let decoration = SpaceItemDecoration::new(16);
    let strategy = LayoutStrategy::horizontal();
    assert_eq!(
        decoration.offsets_for(strategy, &child(0)),
        IntEdgeInsets::new(16, 16, 8, 16)
    );
    assert_eq!(
        decoration.offsets_for(strategy, &child(3)),
        IntEdgeInsets::new(8, 16, 8, 16)
    );
}

#[test]
fn odd_spacing_rounds_half_down() {
    let decoration = SpaceItemDecoration::new(7);
    assert_eq!(
        decoration.offsets_for(LayoutStrategy::vertical(), &child(2)),
        IntEdgeInsets::new(7, 3, 7, 3)
    );
}

#[test]
fn unknown_strategy_spaces_every_side() {
    let decoration = SpaceItemDecoration::new(9);
    for position in [0, 1, 17] {
        assert_eq!(
            decoration.offsets_for(LayoutStrategy::Other, &child(position)),
            IntEdgeInsets::uniform(9)
        );
    }
}

#[test]
fn spacing_from_dp_rounds_to_pixels() {
    assert_eq!(SpaceItemDecoration::from_dp(Dp(8.0), 2.625).space(), 21);
}
