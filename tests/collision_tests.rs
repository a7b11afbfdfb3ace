//! Collision detector tests

use tui_dino::core::{sprites_overlap, Sprite, CACTUS, DINO};
use tui_dino::types::{DINO_COLUMN, GROUND_REST_Y, OBSTACLE_ROW};

const CROSS: Sprite = Sprite::new(&[" x ", "xxx", " x "]);
const CORNERS: Sprite = Sprite::new(&["o o", "   ", "o o"]);

#[test]
fn test_overlapping_glyphs_collide() {
    // Centre of the cross on the corner of the other sprite.
    assert!(sprites_overlap(&CROSS, 0, 0, &CORNERS, 1, 1));
}

#[test]
fn test_space_vs_space_and_space_vs_glyph_do_not_collide() {
    // Same box: cross glyphs only ever meet corner spaces, and the cross's
    // corner spaces meet the corner glyphs.
    assert!(!sprites_overlap(&CROSS, 0, 0, &CORNERS, 0, 0));
    assert!(!sprites_overlap(&CORNERS, 0, 0, &CROSS, 0, 0));
}

#[test]
fn test_result_is_symmetric() {
    for (ax, ay) in [(0, 0), (1, 0), (2, 1), (-1, -1), (1, 1)] {
        assert_eq!(
            sprites_overlap(&CROSS, ax, ay, &CORNERS, 0, 0),
            sprites_overlap(&CORNERS, 0, 0, &CROSS, ax, ay),
            "offset ({}, {})",
            ax,
            ay
        );
    }
}

#[test]
fn test_jumping_dino_clears_cactus() {
    // Apex of the jump is row 0; the cactus starts at row 15.
    for frame in 0..DINO.frame_count() {
        assert!(!sprites_overlap(
            DINO.frame(frame),
            DINO_COLUMN,
            0,
            &CACTUS,
            DINO_COLUMN,
            OBSTACLE_ROW
        ));
    }
}

#[test]
fn test_grounded_dino_hits_cactus_on_every_overlapping_column() {
    let dino = DINO.frame(0);
    let leftmost = DINO_COLUMN - CACTUS.width() as i16 + 1;
    let rightmost = DINO_COLUMN + dino.width() as i16 - 1;
    let first_hit = (leftmost..=rightmost)
        .find(|&x| sprites_overlap(dino, DINO_COLUMN, GROUND_REST_Y, &CACTUS, x, OBSTACLE_ROW));
    assert!(first_hit.is_some());
}
