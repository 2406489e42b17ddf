//! Integration tests for the full frame protocol.
//!
//! Each test builds a board snapshot, renders frames against a recording
//! canvas, and asserts on the recorded draw calls.

use fruitfall::atlas::{FrameRect, SpriteAtlasIndex};
use fruitfall::painter::{
    classify, BoardPainter, BoardSnapshot, DrawCall, RecordingCanvas, SpriteParams,
};
use fruitfall::types::{FruitKind, Placement, Rgba};

/// Atlas with one distinctive frame per fruit sprite.
fn full_atlas() -> SpriteAtlasIndex {
    let mut atlas = SpriteAtlasIndex::new();
    let names = ["apple", "milk", "orange", "bread", "coconut", "star", "lettuce"];
    for (i, name) in names.iter().enumerate() {
        atlas.insert(*name, FrameRect::new(i as i32 * 64, 0, 64, 64));
    }
    atlas
}

fn painter(
    canvas_w: f32,
    canvas_h: f32,
    rows: usize,
    cols: usize,
) -> BoardPainter<RecordingCanvas> {
    BoardPainter::new(canvas_w, canvas_h, rows, cols, (), full_atlas()).unwrap()
}

#[test]
fn two_cell_board_draws_two_borders_and_two_sprites() {
    let mut board = BoardSnapshot::from_rows(&["A   ", " a  ", "    ", "    "]).unwrap();
    board.set_piece_angle(30.0);

    let mut painter = painter(400.0, 400.0, 4, 4);
    let mut canvas = RecordingCanvas::new();
    painter.render_frame(&mut canvas, &board, &board).unwrap();

    let borders = canvas.stroke_rects();
    assert_eq!(borders.len(), 2);
    // 4x4 board on a 400x400 canvas: 100-unit cells, gray 4-unit outline.
    assert_eq!(borders[0], (0.0, 0.0, 100.0, 100.0, Rgba::rgb(0x7f, 0x7f, 0x7f), 4.0));
    assert_eq!(borders[1].0, 100.0);
    assert_eq!(borders[1].1, 100.0);

    let sprites = canvas.sprite_draws();
    assert_eq!(sprites.len(), 2);

    // Both cells are apples, so both use the apple frame.
    let apple_src = full_atlas().frame_rect("apple").unwrap();
    assert_eq!(sprites[0].src, apple_src);
    assert_eq!(sprites[1].src, apple_src);

    // Settled cell spins with the shared accumulator (one step so far);
    // active cell counter-rotates against the live piece angle.
    assert_eq!(sprites[0].rotation_deg, painter.settled_angle());
    assert_eq!(painter.settled_angle(), 0.25);
    assert_eq!(sprites[1].rotation_deg, -30.0);

    // Sprites rotate around the cell center at full cell size, unscaled.
    for sprite in &sprites {
        assert_eq!((sprite.origin_x, sprite.origin_y), (50.0, 50.0));
        assert_eq!((sprite.dest_w, sprite.dest_h), (100.0, 100.0));
        assert_eq!((sprite.scale_x, sprite.scale_y), (1.0, 1.0));
        assert!(!sprite.flip_h && !sprite.flip_v);
    }

    // Case decides shade and placement, not fruit.
    let settled = classify('A');
    let active = classify('a');
    assert_eq!(settled.fruit, FruitKind::Apple);
    assert_eq!(active.fruit, FruitKind::Apple);
    assert_eq!(settled.placement, Placement::Settled);
    assert_eq!(active.placement, Placement::Active);
    assert_ne!(settled.color, active.color);
}

#[test]
fn cell_size_follows_canvas_and_grid_dimensions() {
    let painter = painter(800.0, 400.0, 10, 20);
    let cell = painter.cell_size();
    assert_eq!(cell.w, 40.0);
    assert_eq!(cell.h, 40.0);
}

#[test]
fn unrecognized_code_renders_as_white_star_without_failing() {
    let board = BoardSnapshot::from_rows(&["Z "]).unwrap();
    let mut painter = painter(100.0, 100.0, 1, 2);
    let mut canvas = RecordingCanvas::new();
    painter.render_frame(&mut canvas, &board, &board).unwrap();

    let sprites = canvas.sprite_draws();
    assert_eq!(sprites.len(), 1);
    assert_eq!(sprites[0].src, full_atlas().frame_rect("star").unwrap());
    assert_eq!(classify('Z').color, Rgba::rgb(0xff, 0xff, 0xff));
}

#[test]
fn settled_angle_advances_one_step_per_frame() {
    let board = BoardSnapshot::from_rows(&["AB", "  "]).unwrap();
    let mut painter = painter(100.0, 100.0, 2, 2);
    let mut canvas = RecordingCanvas::new();

    assert_eq!(painter.settled_angle(), 0.0);
    for frame in 1..=8 {
        canvas.clear();
        painter.render_frame(&mut canvas, &board, &board).unwrap();
        assert_eq!(painter.settled_angle(), frame as f32 * 0.25);
        // Step size is independent of how many settled cells exist.
        for sprite in canvas.sprite_draws() {
            assert_eq!(sprite.rotation_deg, painter.settled_angle());
        }
    }
}

#[test]
fn border_and_grid_geometry_is_idempotent_across_frames() {
    let board = BoardSnapshot::from_rows(&["A a", "  B"]).unwrap();
    let mut painter = painter(300.0, 200.0, 2, 3);

    let mut first = RecordingCanvas::new();
    painter.render_frame(&mut first, &board, &board).unwrap();
    let mut second = RecordingCanvas::new();
    painter.render_frame(&mut second, &board, &board).unwrap();

    // Sprite rotation legitimately differs (animation accumulator); the
    // border and grid-line geometry must not.
    assert_eq!(first.stroke_rects(), second.stroke_rects());
    assert_eq!(first.lines(), second.lines());
}

#[test]
fn offset_translates_every_drawn_element() {
    let board = BoardSnapshot::from_rows(&["A ", "  "]).unwrap();
    let mut painter = painter(200.0, 200.0, 2, 2);

    let mut before = RecordingCanvas::new();
    painter.render_frame(&mut before, &board, &board).unwrap();

    painter.set_offset(15.0, -8.0);
    let mut after = RecordingCanvas::new();
    painter.render_frame(&mut after, &board, &board).unwrap();

    let rects_before = before.stroke_rects();
    let rects_after = after.stroke_rects();
    assert_eq!(rects_before.len(), rects_after.len());
    for (b, a) in rects_before.iter().zip(&rects_after) {
        assert_eq!(a.0, b.0 + 15.0);
        assert_eq!(a.1, b.1 - 8.0);
        // Size is untouched by the offset.
        assert_eq!(a.2, b.2);
        assert_eq!(a.3, b.3);
    }

    let sprites_before = before.sprite_draws();
    let sprites_after = after.sprite_draws();
    for (b, a) in sprites_before.iter().zip(&sprites_after) {
        assert_eq!(a.dest_x, b.dest_x + 15.0);
        assert_eq!(a.dest_y, b.dest_y - 8.0);
    }

    for (b, a) in before.lines().iter().zip(&after.lines()) {
        assert_eq!(a.0, b.0 + 15.0);
        assert_eq!(a.1, b.1 - 8.0);
        assert_eq!(a.2, b.2 + 15.0);
        assert_eq!(a.3, b.3 - 8.0);
    }
}

#[test]
fn passes_run_in_order_with_balanced_batches() {
    let board = BoardSnapshot::from_rows(&["A"]).unwrap();
    let mut painter = painter(100.0, 100.0, 1, 1);
    let mut canvas = RecordingCanvas::new();
    painter.render_frame(&mut canvas, &board, &board).unwrap();

    assert_eq!(
        canvas.batch_markers(),
        vec![
            DrawCall::BeginOutline,
            DrawCall::EndOutline,
            DrawCall::BeginSprite,
            DrawCall::EndSprite,
            DrawCall::BeginOutline,
            DrawCall::EndOutline,
        ]
    );
}

#[test]
fn grid_line_pass_draws_rows_plus_cols_lines() {
    let painter = painter(300.0, 200.0, 10, 6);
    let mut canvas = RecordingCanvas::new();
    painter.draw_grid_lines(&mut canvas);

    let lines = canvas.lines();
    assert_eq!(lines.len(), 16);

    let white = Rgba::rgb(0xff, 0xff, 0xff);
    // Horizontal lines span the canvas width at row boundaries.
    let (x1, y1, x2, y2, color, thickness) = lines[1];
    assert_eq!((x1, y1, x2, y2), (0.0, 20.0, 300.0, 20.0));
    assert_eq!(color, white);
    assert_eq!(thickness, 1.0);
    // Vertical lines span the canvas height at column boundaries.
    let (x1, y1, x2, y2, _, _) = lines[11];
    assert_eq!((x1, y1, x2, y2), (50.0, 0.0, 50.0, 200.0));
}

#[test]
fn missing_atlas_entry_fails_loudly_but_releases_the_batch() {
    let mut atlas = SpriteAtlasIndex::new();
    // No "apple" frame on purpose.
    atlas.insert("star", FrameRect::new(0, 0, 64, 64));

    let board = BoardSnapshot::from_rows(&["A"]).unwrap();
    let mut painter: BoardPainter<RecordingCanvas> =
        BoardPainter::new(100.0, 100.0, 1, 1, (), atlas).unwrap();
    let mut canvas = RecordingCanvas::new();

    let err = painter.render_frame(&mut canvas, &board, &board).unwrap_err();
    assert!(err.to_string().contains("apple"));

    // The sprite batch still closed on the way out.
    assert_eq!(canvas.calls.last(), Some(&DrawCall::EndSprite));
}

#[test]
fn construction_rejects_bad_configuration() {
    let atlas = full_atlas();
    assert!(BoardPainter::<RecordingCanvas>::new(0.0, 100.0, 10, 10, (), atlas.clone()).is_err());
    assert!(BoardPainter::<RecordingCanvas>::new(100.0, 100.0, 0, 10, (), atlas.clone()).is_err());
    assert!(BoardPainter::<RecordingCanvas>::new(100.0, 100.0, 10, 0, (), atlas).is_err());
}

#[test]
fn resize_takes_effect_on_the_next_frame() {
    let board = BoardSnapshot::from_rows(&["A ", "  "]).unwrap();
    let mut painter = painter(200.0, 200.0, 2, 2);

    painter.resize(400.0, 100.0).unwrap();
    let mut canvas = RecordingCanvas::new();
    painter.render_frame(&mut canvas, &board, &board).unwrap();

    let sprites: Vec<SpriteParams> = canvas.sprite_draws();
    assert_eq!(sprites.len(), 1);
    assert_eq!((sprites[0].dest_w, sprites[0].dest_h), (200.0, 50.0));
}
