//! Main application for the Pentago GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardClick, BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState, TurnPhase};
use super::theme::*;
use crate::board::Color;
use crate::config::AppConfig;
use crate::rules::Winner;

/// Main Pentago application
pub struct PentagoApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl PentagoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let human_color = config.game.human_color.unwrap_or(Color::White);
        Self {
            state: GameState::new(GameMode::PvE { human_color }, config.ai.clone()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        tracing::info!(?mode, "new game");
        self.state = GameState::new(mode, self.state.ai_config().clone());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("PENTAGO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, then twist").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, text_color) = match turn {
                Color::White => (WHITE_STONE, BLACK_STONE),
                Color::Black => (BLACK_STONE, WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    self.state.move_history.len().to_string(),
                    egui::FontId::proportional(16.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {secs:.1}s"), STATUS_WARNING)
                    } else if self.state.is_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        match self.state.phase {
                            TurnPhase::Place => ("Place a stone".to_string(), STATUS_NORMAL),
                            TurnPhase::Rotate { .. } => (
                                "Rotate: left click CW, right click CCW".to_string(),
                                ROTATE_HIGHLIGHT,
                            ),
                        }
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if self.state.mode == GameMode::PvP {
                    btn_frame.show(ui, |ui| {
                        if ui
                            .add(
                                egui::Label::new(
                                    RichText::new("Hint").size(12.0).color(TEXT_PRIMARY),
                                )
                                .sense(egui::Sense::click()),
                            )
                            .clicked()
                        {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let ai = self.state.ai_config();
            ui.label(
                RichText::new(format!("AI DEBUG  (breadth {}, depth {})", ai.breadth, ai.depth))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{}ms", result.time_ms))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!("{} nodes", result.nodes))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    });
                });
            });

            if let Some(mv) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(mv.to_string()).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.winner {
            Winner::White => "WHITE WINS!",
            Winner::Black => "BLACK WINS!",
            Winner::Draw | Winner::None => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_stones = if self.state.is_over() {
                self.state.winning_stones()
            } else {
                Vec::new()
            };
            let overlay = BoardOverlay {
                phase: self.state.phase,
                turn: self.state.current_turn(),
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_stones: &winning_stones,
                interactive: !self.state.is_over()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, &self.state.display_board(), &overlay);

            let outcome = match clicked {
                Some(BoardClick::Place(pos)) => self.state.try_place(pos),
                Some(BoardClick::Rotate(quadrant, direction)) => {
                    self.state.try_rotate(quadrant, direction)
                }
                None => Ok(()),
            };
            if let Err(msg) = outcome {
                self.state.message = Some(msg);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // U - Undo, Escape - take back an unrotated stone
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.cancel_placement();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for PentagoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
