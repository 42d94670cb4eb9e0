//! Board rendering for the Pentago GUI

use crate::board::{Board, Color, Direction, Move, Pos, Quadrant, Stone, BOARD_SIZE, QUADRANT_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::TurnPhase;
use super::theme::*;

/// A click on the board, interpreted for the current turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardClick {
    /// Place a stone on the cell
    Place(Pos),
    /// Rotate the quadrant (left button clockwise, right button counterclockwise)
    Rotate(Quadrant, Direction),
}

/// What the board should draw besides the stones
pub struct BoardOverlay<'a> {
    pub phase: TurnPhase,
    pub turn: Color,
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    pub winning_stones: &'a [Pos],
    pub interactive: bool,
}

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
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the click, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        overlay: &BoardOverlay<'_>,
    ) -> Option<BoardClick> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN - QUADRANT_GAP_WIDTH) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_quadrants(&painter);
        self.draw_stones(&painter, board);

        if let Some(mv) = overlay.last_move {
            self.draw_last_move_marker(&painter, mv);
        }

        self.draw_winning_stones(&painter, overlay.winning_stones);

        if let Some(mv) = overlay.suggested_move {
            self.draw_suggestion(&painter, mv.pos(), overlay.turn);
        }

        if !overlay.interactive {
            return None;
        }

        let pointer_pos = response.hover_pos()?;

        match overlay.phase {
            TurnPhase::Place => {
                let pos = self.screen_to_board(pointer_pos)?;
                if board.get(pos) != Stone::Empty {
                    return None;
                }
                self.draw_hover_preview(&painter, pos, overlay.turn);
                response.clicked().then_some(BoardClick::Place(pos))
            }
            TurnPhase::Rotate { .. } => {
                let quadrant = self.screen_to_quadrant(pointer_pos)?;
                painter.rect_filled(
                    self.quadrant_rect(quadrant),
                    CornerRadius::same(4),
                    hover_quadrant(),
                );
                painter.rect_stroke(
                    self.quadrant_rect(quadrant),
                    CornerRadius::same(4),
                    Stroke::new(2.0, ROTATE_HIGHLIGHT),
                    egui::StrokeKind::Inside,
                );

                if response.clicked() {
                    Some(BoardClick::Rotate(quadrant, Direction::Clockwise))
                } else if response.secondary_clicked() {
                    Some(BoardClick::Rotate(quadrant, Direction::CounterClockwise))
                } else {
                    None
                }
            }
        }
    }

    /// Draw the gap between the quadrants, then the four plates with their holes
    fn draw_quadrants(&self, painter: &Painter) {
        let half = QUADRANT_SIZE as f32 * self.cell_size;
        let inner = self.board_rect.shrink(BOARD_MARGIN);
        let gap_x = inner.min.x + half;
        let gap_y = inner.min.y + half;
        painter.rect_filled(
            Rect::from_min_max(
                Pos2::new(gap_x, inner.min.y),
                Pos2::new(gap_x + QUADRANT_GAP_WIDTH, inner.max.y),
            ),
            CornerRadius::ZERO,
            QUADRANT_GAP,
        );
        painter.rect_filled(
            Rect::from_min_max(
                Pos2::new(inner.min.x, gap_y),
                Pos2::new(inner.max.x, gap_y + QUADRANT_GAP_WIDTH),
            ),
            CornerRadius::ZERO,
            QUADRANT_GAP,
        );

        for quadrant in Quadrant::ALL {
            painter.rect_filled(self.quadrant_rect(quadrant), CornerRadius::same(4), QUADRANT_BG);
        }

        let hole_radius = self.cell_size * HOLE_RADIUS_RATIO;
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let center = self.board_to_screen(Pos::from_index(idx));
            painter.circle_filled(center, hole_radius, HOLE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let stone = board.get(pos);

            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Mark the last placed stone where the rotation left it
    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        let center = self.board_to_screen(mv.landing());
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        painter.rect_stroke(
            self.quadrant_rect(mv.quadrant),
            CornerRadius::same(4),
            Stroke::new(1.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Outside,
        );
    }

    fn draw_winning_stones(&self, painter: &Painter, stones: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;

        for pos in stones {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center, radius, Self::ghost_color(turn, 100));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            match turn {
                Color::Black => WHITE_STONE,
                Color::White => BLACK_STONE,
            },
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, Self::ghost_color(turn, 80));
        painter.circle_stroke(center, radius, Stroke::new(1.0, hover_valid()));
    }

    fn ghost_color(turn: Color, alpha: u8) -> Color32 {
        match turn {
            Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, alpha),
            Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, alpha),
        }
    }

    /// Screen offset of the start of cell `idx` along one axis, relative to
    /// the board margin
    fn axis_offset(&self, idx: usize) -> f32 {
        let gap = if idx >= QUADRANT_SIZE { QUADRANT_GAP_WIDTH } else { 0.0 };
        idx as f32 * self.cell_size + gap
    }

    /// Cell index along one axis, `None` in the margin or the quadrant gap
    fn axis_index(&self, offset: f32) -> Option<u8> {
        let half = QUADRANT_SIZE as f32 * self.cell_size;
        let idx = if offset < 0.0 {
            return None;
        } else if offset < half {
            offset / self.cell_size
        } else if offset < half + QUADRANT_GAP_WIDTH {
            return None;
        } else {
            QUADRANT_SIZE as f32 + (offset - half - QUADRANT_GAP_WIDTH) / self.cell_size
        };

        let idx = idx.floor() as usize;
        (idx < BOARD_SIZE).then_some(idx as u8)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = self.axis_index(relative.x - BOARD_MARGIN)?;
        let row = self.axis_index(relative.y - BOARD_MARGIN)?;
        Some(Pos::new(row, col))
    }

    /// Quadrant under the pointer; the gap splits the board in half
    pub fn screen_to_quadrant(&self, screen_pos: Pos2) -> Option<Quadrant> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let center = self.board_rect.center();
        let lower = screen_pos.y >= center.y;
        let right = screen_pos.x >= center.x;
        Some(match (lower, right) {
            (false, false) => Quadrant::UpperLeft,
            (false, true) => Quadrant::UpperRight,
            (true, false) => Quadrant::LowerLeft,
            (true, true) => Quadrant::LowerRight,
        })
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN + self.cell_size * 0.5);
        let x = origin.x + self.axis_offset(pos.col as usize);
        let y = origin.y + self.axis_offset(pos.row as usize);
        Pos2::new(x, y)
    }

    fn quadrant_rect(&self, quadrant: Quadrant) -> Rect {
        let (row_off, col_off) = quadrant.offset();
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + self.axis_offset(col_off),
                BOARD_MARGIN + self.axis_offset(row_off),
            );
        let side = QUADRANT_SIZE as f32 * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(side))
    }
}
