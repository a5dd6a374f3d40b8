//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::rules::Win;

use super::theme::*;

/// Board view handles rendering and input for the game grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any.
    ///
    /// Cells on the winning line are filled with the highlight color.
    /// While the game is undecided, hovering an empty cell previews the
    /// next mark and a click on it is reported back.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_mark: Mark,
        winner: Option<Win>,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board area that fits the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size =
            (board_size - 2.0 * BOARD_MARGIN - (BOARD_SIZE as f32 - 1.0) * CELL_GAP)
                / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        // Draw cells and their marks
        for idx in 0..TOTAL_CELLS {
            let rect = self.cell_rect(idx);
            let on_winning_line = winner.is_some_and(|w| w.contains(idx));

            let fill = if on_winning_line { WIN_CELL_BG } else { CELL_BG };
            painter.rect_filled(rect, CornerRadius::same(CELL_ROUNDING), fill);

            let mark = board.get_index(idx);
            if !mark.is_empty() {
                let color = if on_winning_line {
                    MARK_ON_WIN
                } else {
                    Self::mark_color(mark)
                };
                self.draw_mark(&painter, rect, mark, color);
            }
        }

        // Handle hover preview and click
        let mut clicked_cell = None;

        if winner.is_none() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(idx) = self.screen_to_cell(pointer_pos) {
                    if board.is_empty(idx) {
                        let preview = match next_mark {
                            Mark::X => x_preview(),
                            Mark::O => o_preview(),
                            Mark::Empty => Color32::TRANSPARENT,
                        };
                        self.draw_mark(&painter, self.cell_rect(idx), next_mark, preview);

                        if response.clicked() {
                            clicked_cell = Some(idx);
                        }
                    }
                }
            }
        }

        clicked_cell
    }

    fn mark_color(mark: Mark) -> Color32 {
        match mark {
            Mark::X => X_MARK,
            Mark::O => O_MARK,
            Mark::Empty => Color32::TRANSPARENT,
        }
    }

    /// Draw a single mark centered in its cell
    fn draw_mark(&self, painter: &Painter, rect: Rect, mark: Mark, color: Color32) {
        let center = rect.center();
        let half = rect.width() * MARK_RADIUS_RATIO;
        let stroke = Stroke::new(rect.width() * MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * (self.cell_size + CELL_GAP),
                BOARD_MARGIN + pos.row as f32 * (self.cell_size + CELL_GAP),
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index.
    ///
    /// Points in the gaps between cells map to nothing.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        (0..TOTAL_CELLS).find(|&idx| self.cell_rect(idx).contains(screen_pos))
    }
}
