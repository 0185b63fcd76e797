//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE};
use crate::rules::WinLine;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        winning_line: Option<WinLine>,
        game_over: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y);
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview and click, only while the human can act
        let mut clicked = None;
        if !game_over && current_turn == Player::Human {
            if let Some(pointer) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer) {
                    let is_free = board.is_empty(pos);
                    self.draw_hover_preview(&painter, pos, is_free);
                    if response.clicked() && is_free {
                        clicked = Some(pos);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two horizontal and two vertical dividing lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(self.cell_size * GRID_LINE_RATIO, GRID_LINE);
        let min = self.board_rect.min;
        let extent = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    Pos2::new(min.x, min.y + offset),
                    Pos2::new(min.x + extent, min.y + offset),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(min.x + offset, min.y),
                    Pos2::new(min.x + offset, min.y + extent),
                ],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                match board.get(pos) {
                    Cell::Human => self.draw_cross(painter, pos, CROSS_COLOR),
                    Cell::Computer => self.draw_circle(painter, pos, CIRCLE_COLOR),
                    Cell::Empty => {}
                }
            }
        }
    }

    /// Draw the human's X as two crossed strokes
    fn draw_cross(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let stroke = Stroke::new(self.cell_size * CROSS_WIDTH_RATIO, color);
        let inset = self.cell_size * CROSS_INSET_RATIO;
        let top_left = self.cell_origin(pos) + Vec2::splat(inset);
        let bottom_right = self.cell_origin(pos) + Vec2::splat(self.cell_size - inset);
        let top_right = Pos2::new(bottom_right.x, top_left.y);
        let bottom_left = Pos2::new(top_left.x, bottom_right.y);

        painter.line_segment([top_left, bottom_right], stroke);
        painter.line_segment([bottom_left, top_right], stroke);
    }

    /// Draw the computer's O as a stroked circle
    fn draw_circle(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        painter.circle_stroke(
            self.cell_center(pos),
            self.cell_size * CIRCLE_RADIUS_RATIO,
            Stroke::new(self.cell_size * CIRCLE_WIDTH_RATIO, color),
        );
    }

    /// Draw the winning line through the centers of its end cells
    fn draw_winning_line(&self, painter: &Painter, line: &WinLine) {
        let stroke = Stroke::new(self.cell_size * WIN_LINE_RATIO, WIN_LINE);
        painter.line_segment(
            [self.cell_center(line[0]), self.cell_center(line[2])],
            stroke,
        );
    }

    /// Draw hover preview: a faint X on a free cell, a red tint otherwise
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_free: bool) {
        if is_free {
            self.draw_cross(painter, pos, hover_cross());
        } else {
            let rect = Rect::from_min_size(self.cell_origin(pos), Vec2::splat(self.cell_size));
            painter.rect_filled(rect, CornerRadius::ZERO, hover_blocked());
        }
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Top-left corner of a cell in screen coordinates
    fn cell_origin(&self, pos: Pos) -> Pos2 {
        Pos2::new(
            self.board_rect.min.x + pos.col as f32 * self.cell_size,
            self.board_rect.min.y + pos.row as f32 * self.cell_size,
        )
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_origin(pos) + Vec2::splat(self.cell_size * 0.5)
    }
}
