//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::board::Player;
use crate::engine::{Engine, MoveResult};
use crate::game::{GameState, Outcome};

use super::board_view::BoardView;
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    game: GameState,
    engine: Engine,
    board_view: BoardView,
    last_result: Option<MoveResult>,
    message: Option<String>,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            game: GameState::new(),
            engine: Engine::new(),
            board_view: BoardView::default(),
            last_result: None,
            message: None,
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.game = GameState::reset();
        self.last_result = None;
        self.message = None;
    }

    /// Let the computer reply whenever it is to move. The 3x3 search is
    /// exhaustive but returns in microseconds, so it runs inline.
    fn step_computer(&mut self) {
        if self.game.outcome() != Outcome::InProgress
            || self.game.current_turn() != Player::Computer
        {
            return;
        }

        let result = self.engine.get_move_with_stats(&self.game);
        self.last_result = Some(result);

        if let Some(pos) = result.best_move {
            if let Err(err) = self
                .game
                .place_mark(pos.row as usize, pos.col as usize, Player::Computer)
            {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the left info panel
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::left("info_panel")
            .exact_width(320.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_rules_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.game.outcome().is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("X O").size(20.0).strong().color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (glyph, name) = match self.game.current_turn() {
                Player::Human => ("X", "Player"),
                Player::Computer => ("O", "Computer"),
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph).size(28.0).strong().color(CROSS_COLOR));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Turn: {}", name)).size(16.0).color(TEXT_PRIMARY));
                    let status = if self.game.outcome().is_terminal() {
                        "Game over"
                    } else {
                        "Click an empty square"
                    };
                    ui.label(RichText::new(status).size(11.0).color(TEXT_MUTED));
                });
            });
        });
    }

    /// Render the rules card
    fn render_rules_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            for (i, rule) in RULES.iter().enumerate() {
                let text = if i == 0 {
                    RichText::new(*rule).size(13.0).strong().color(TEXT_PRIMARY)
                } else {
                    RichText::new(*rule).size(12.0).color(TEXT_SECONDARY)
                };
                ui.label(text);
            }
        });
    }

    /// Render actions card with the New Game button
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let button = egui::Button::new(
                RichText::new("New Game").size(14.0).strong().color(PANEL_BG),
            )
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6));

            if ui.add_sized([120.0, 36.0], button).clicked() {
                self.new_game();
            }

            ui.add_space(6.0);
            ui.label(RichText::new("N: new game   D: debug panel").size(10.0).color(TEXT_MUTED));
        });
    }

    /// Render search diagnostics card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);

            if let Some(result) = &self.last_result {
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(12.0)
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(pos) = result.best_move {
                    ui.label(
                        RichText::new(format!("Move: ({}, {})", pos.row, pos.col))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                }
            } else {
                ui.label(RichText::new("No search yet").size(11.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card with the winner announcement
    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let (text, color) = match self.game.outcome() {
            Outcome::Won { winner: Player::Human, .. } => ("Player Wins!", STATUS_WIN),
            Outcome::Won { winner: Player::Computer, .. } => ("Computer Wins!", STATUS_WIN),
            Outcome::Draw => ("It's a Draw!", STATUS_DRAW),
            Outcome::InProgress => return,
        };

        Self::card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).size(18.0).strong().color(color));
            });
        });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let winning_line = match self.game.outcome() {
                    Outcome::Won { line, .. } => Some(line),
                    _ => None,
                };

                let clicked = self.board_view.show(
                    ui,
                    self.game.board(),
                    self.game.current_turn(),
                    winning_line,
                    self.game.outcome().is_terminal(),
                );

                if let Some(pos) = clicked {
                    match self
                        .game
                        .place_mark(pos.row as usize, pos.col as usize, Player::Human)
                    {
                        Ok(()) => self.message = None,
                        // A rejected click is just ignored apart from the note
                        Err(err) => self.message = Some(err.to_string()),
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The human moves via board clicks; the computer replies here.
        self.step_computer();

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
