//! Cell classification: cell code to color, sprite, and placement.
//!
//! Both tables are total functions over `char`. Unknown codes never fail;
//! they fall back to white and the star sprite so the renderer degrades
//! gracefully on unexpected grid content.

use fruitfall_types::{FruitKind, Placement, Rgba};

/// Display attributes of one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    pub color: Rgba,
    pub fruit: FruitKind,
    pub placement: Placement,
}

/// Classify a cell code into its display attributes.
pub fn classify(code: char) -> CellVisual {
    CellVisual {
        color: color_for(code),
        fruit: FruitKind::from_code(code),
        placement: Placement::from_code(code),
    }
}

/// Display color for a cell code.
///
/// Case distinguishes the settled and active shades of a fruit family.
/// The floor code 'F' gets the dark green floor color; codes outside the
/// table ('f' and the lettuce pair included) fall back to white.
pub fn color_for(code: char) -> Rgba {
    match code {
        // floor
        'F' => Rgba::rgb(0x1e, 0x3c, 0x00),

        // apple: blue pair
        'A' => Rgba::rgb(0x0c, 0x7b, 0x93),
        'a' => Rgba::rgb(0x27, 0x49, 0x6d),

        // milk: teal pair
        'B' => Rgba::rgb(0x00, 0xcf, 0x91),
        'b' => Rgba::rgb(0x00, 0x46, 0x31),

        // orange
        'c' => Rgba::rgb(0xff, 0xae, 0x8f),
        'C' => Rgba::rgb(0x6f, 0x5a, 0x7e),

        // bread: magenta pair
        'D' => Rgba::rgb(0xf3, 0x75, 0xf3),
        'd' => Rgba::rgb(0x6a, 0x2f, 0x6a),

        // coconut: pink/brown pair
        'E' => Rgba::rgb(0xff, 0x9d, 0x9d),
        'e' => Rgba::rgb(0x91, 0x2e, 0x00),

        _ => Rgba::rgb(0xff, 0xff, 0xff),
    }
}
