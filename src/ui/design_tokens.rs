// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the viewer shell, following the W3C Design Tokens standard.

## Organization

- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pinch_lens::ui::design_tokens::{opacity, spacing};
use iced::Color;

let glass = Color {
    a: opacity::GLASS,
    ..Color::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Image drop shadow
    pub const SHADOW: f32 = 0.2;
    /// Frosted panels (info panel, controls, drawer)
    pub const GLASS: f32 = 0.55;
    /// Secondary glyphs such as the drawer handle
    pub const SECONDARY: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 30.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Long-press target of the info panel
    pub const INFO_ICON: f32 = 30.0;
    /// Zoom control glyphs
    pub const CONTROL_ICON: f32 = 36.0;
    /// Drawer handle height
    pub const DRAWER_HANDLE: f32 = 40.0;
    /// Maximum width of the info readout
    pub const INFO_PANEL_MAX_WIDTH: f32 = 420.0;
    /// Full width of the thumbnail drawer
    pub const DRAWER_WIDTH: f32 = 260.0;
    /// Width of a single thumbnail
    pub const THUMBNAIL_WIDTH: f32 = 80.0;
    /// Base height of the displayed page at scale 1
    pub const PAGE_HEIGHT: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body
    pub const BODY: f32 = 14.0;
    /// Info readout
    pub const FOOTNOTE: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, Color};
    use iced::{Shadow, Vector};

    /// Soft drop shadow under the displayed page.
    pub const PAGE: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..Color::BLACK
        },
        offset: Vector { x: 2.0, y: 2.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < 1.0);

    assert!(sizing::THUMBNAIL_WIDTH < sizing::DRAWER_WIDTH);
};
