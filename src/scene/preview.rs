//! Built-in live stream preview layout.

use crate::types::{Colour, DrawCommand};

use super::Scene;

const WIDTH: i32 = 1365;
const HEIGHT: i32 = 768;

const BACKGROUND: Colour = Colour::rgb(0x0b, 0x10, 0x20);
const NAVY: Colour = Colour::rgb(0x0f, 0x17, 0x2a);
const PANEL: Colour = Colour::rgb(0x11, 0x18, 0x27);
const SLATE: Colour = Colour::rgb(0x1f, 0x29, 0x37);
const TEXT: Colour = Colour::rgb(0xe5, 0xe7, 0xeb);
const VIOLET: Colour = Colour::rgb(0xc0, 0x84, 0xfc);
const CYAN: Colour = Colour::rgb(0x22, 0xd3, 0xee);
const LIGHT_CYAN: Colour = Colour::rgb(0x67, 0xe8, 0xf9);
const INDIGO: Colour = Colour::rgb(0xa5, 0xb4, 0xfc);

impl Scene {
    /// The 1365x768 "GOPRO LIVE STREAM" preview page.
    ///
    /// Translucent colours are stored as-is; the canvas does not blend.
    pub fn stream_preview() -> Self {
        let mut scene = Scene::new(WIDTH as u32, HEIGHT as u32, BACKGROUND);

        // Header
        scene
            .push(DrawCommand::rect(0, 0, WIDTH, 80, NAVY))
            .push(DrawCommand::text(28, 26, "GOPRO LIVE STREAM", TEXT, 3))
            .push(DrawCommand::rect(WIDTH - 190, 24, 150, 32, SLATE))
            .push(DrawCommand::text(WIDTH - 180, 30, "PREVIEW MODE", VIOLET, 2));

        // Video area
        scene
            .push(DrawCommand::rect(40, 110, 900, 500, PANEL))
            .push(DrawCommand::rect(60, 130, 860, 460, PANEL))
            .push(DrawCommand::rect(60, 130, 860, 460, SLATE.with_alpha(180)))
            .push(DrawCommand::rect(120, 190, 740, 340, NAVY.with_alpha(200)))
            .push(DrawCommand::triangle([(430, 300), (430, 420), (540, 360)], CYAN))
            .push(DrawCommand::text(70, 520, "LIVE PREVIEW", LIGHT_CYAN, 3));

        // Metrics panel
        scene
            .push(DrawCommand::rect(990, 110, 320, 240, PANEL))
            .push(DrawCommand::rect(1010, 130, 280, 200, SLATE))
            .push(DrawCommand::text(1030, 150, "STREAM HEALTH", TEXT, 2))
            .push(DrawCommand::text(1030, 190, "STATE  READY", INDIGO, 2))
            .push(DrawCommand::text(1030, 220, "BUFFER  1.8S", INDIGO, 2))
            .push(DrawCommand::text(1030, 250, "BITRATE  5.2MB", INDIGO, 2));

        // Chat panel
        scene
            .push(DrawCommand::rect(990, 370, 320, 240, PANEL))
            .push(DrawCommand::rect(1010, 390, 280, 200, SLATE))
            .push(DrawCommand::text(1030, 410, "LIVE CHAT", TEXT, 2))
            .push(DrawCommand::text(1030, 450, "VIEWERS CAN POST", VIOLET, 2));

        // Footer
        scene
            .push(DrawCommand::rect(40, 640, WIDTH - 80, 100, NAVY))
            .push(DrawCommand::text(
                60,
                670,
                "HOW TO GO LIVE: 1) START RTMP  2) OPEN PLAYER  3) SHARE LINK",
                TEXT,
                2,
            ));

        scene
    }
}
