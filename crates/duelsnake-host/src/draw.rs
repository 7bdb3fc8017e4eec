use serde::Serialize;

use duelsnake_classic::DuelFrame;
use duelsnake_core::player::{PlayerColor, PlayerSlot};

use crate::layout::{
    BANNER_FONT_SIZE, BORDER_THICKNESS, DARK, HINT_FONT_SIZE, LIGHT, Layout, RED, Rect,
    SCORE_FONT_SIZE, TITLE_FONT_SIZE, score_label,
};

pub const TITLE: &str = "2-Player Snake";
pub const RESTART_HINT: &str = "Press SPACE to Restart";
/// Corner rounding of snake segments, as a fraction of the cell size.
pub const SEGMENT_ROUNDNESS: f32 = 0.5;

/// Receives one view of the game per frame.
pub trait Renderer<F> {
    fn render(&mut self, frame: &F);
}

/// Renderer that draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl<F> Renderer<F> for NullRenderer {
    fn render(&mut self, _frame: &F) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sprite {
    Food,
    PowerUp,
}

/// Backend-neutral drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: PlayerColor,
    },
    RoundedRect {
        rect: Rect,
        roundness: f32,
        color: PlayerColor,
    },
    Sprite {
        sprite: Sprite,
        rect: Rect,
    },
    Outline {
        rect: Rect,
        thickness: f32,
        color: PlayerColor,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: u16,
        color: PlayerColor,
    },
}

/// Translate a frame into draw commands.
///
/// While the round runs the playfield is drawn; once it is over the winner
/// banner and restart hint replace it. Border, title and scores are always
/// drawn on top.
pub fn draw_frame(frame: &DuelFrame, layout: &Layout) -> Vec<DrawCommand> {
    let mut cmds = vec![DrawCommand::Clear { color: LIGHT }];

    if frame.running {
        for snake in &frame.snakes {
            cmds.extend(snake.body.iter().map(|&cell| DrawCommand::RoundedRect {
                rect: layout.cell_rect(cell),
                roundness: SEGMENT_ROUNDNESS,
                color: snake.color,
            }));
        }
        if let Some(cell) = frame.food {
            cmds.push(DrawCommand::Sprite {
                sprite: Sprite::Food,
                rect: layout.cell_rect(cell),
            });
        }
        if let Some(cell) = frame.powerup {
            cmds.push(DrawCommand::Sprite {
                sprite: Sprite::PowerUp,
                rect: layout.cell_rect(cell),
            });
        }
    } else {
        let (x, y) = layout.banner_pos();
        cmds.push(DrawCommand::Text {
            text: frame.winner_message.clone(),
            x,
            y,
            size: BANNER_FONT_SIZE,
            color: RED,
        });
        let (x, y) = layout.hint_pos();
        cmds.push(DrawCommand::Text {
            text: RESTART_HINT.to_string(),
            x,
            y,
            size: HINT_FONT_SIZE,
            color: RED,
        });
    }

    cmds.push(DrawCommand::Outline {
        rect: layout.border_rect(),
        thickness: BORDER_THICKNESS,
        color: DARK,
    });
    let (x, y) = layout.title_pos();
    cmds.push(DrawCommand::Text {
        text: TITLE.to_string(),
        x,
        y,
        size: TITLE_FONT_SIZE,
        color: DARK,
    });
    for slot in PlayerSlot::BOTH {
        let (x, y) = layout.score_pos(slot);
        cmds.push(DrawCommand::Text {
            text: score_label(slot, frame.scores[slot.index()]),
            x,
            y,
            size: SCORE_FONT_SIZE,
            color: DARK,
        });
    }
    cmds
}

/// Keeps the draw list of the most recent frame.
#[derive(Debug, Default)]
pub struct DrawList {
    pub layout: Layout,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            commands: Vec::new(),
            frames: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer<DuelFrame> for DrawList {
    fn render(&mut self, frame: &DuelFrame) {
        self.commands = draw_frame(frame, &self.layout);
        self.frames += 1;
    }
}
