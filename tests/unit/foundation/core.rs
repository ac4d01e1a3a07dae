use super::*;

#[test]
fn canvas_new_stores_dimensions() {
    let c = Canvas::new(800, 600);
    assert_eq!(c.width, 800);
    assert_eq!(c.height, 600);
}

#[test]
fn grid_extent_matches_the_logical_space() {
    assert_eq!(GRID_EXTENT, 50.0);
}
