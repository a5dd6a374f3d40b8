//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::game::{reduce, Action, GameState};

use super::board_view::BoardView;
use super::theme::*;

/// Main application.
///
/// Owns the game state and the board view. Each frame renders from the
/// current state, collects at most one [`Action`] from user input, and
/// replaces the state with the reducer's result.
pub struct App {
    state: GameState,
    board_view: BoardView,
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X·O").size(20.0).color(TEXT_MUTED));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("with time travel").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render status card with the status line
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = if self.state.winner().is_some() {
                STATUS_WIN
            } else if self.state.is_draw() {
                STATUS_DRAW
            } else {
                TEXT_PRIMARY
            };
            ui.label(
                RichText::new(self.state.status_line())
                    .size(14.0)
                    .strong()
                    .color(color),
            );
        });
    }

    /// Render the move list with the sort toggle; clicking an entry
    /// jumps to that step
    fn render_move_list_card(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let steps: Vec<usize> = if self.state.sort_ascending() {
                (0..self.state.history().len()).collect()
            } else {
                (0..self.state.history().len()).rev().collect()
            };

            for step in steps {
                let label = self.state.move_label(step);
                // The viewed step is bold, all others normal weight
                let text = if step == self.state.current_step() {
                    RichText::new(label).size(12.0).strong().color(TEXT_PRIMARY)
                } else {
                    RichText::new(label).size(12.0).color(TEXT_SECONDARY)
                };

                if ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked()
                {
                    action = Some(Action::JumpTo(step));
                }
            }

            ui.add_space(10.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            btn_frame.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("Toggle Sort Order")
                                .size(12.0)
                                .color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    action = Some(Action::ToggleSortOrder);
                }
            });
        });

        action
    }

    /// Render the side panel with game info
    fn render_side_panel(&self, ctx: &Context) -> Option<Action> {
        let mut action = None;

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                action = self.render_move_list_card(ui);
            });

        action
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;

        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            let clicked = self.board_view.show(
                ui,
                self.state.current_board(),
                self.state.next_mark(),
                self.state.winner(),
            );

            if let Some(cell) = clicked {
                action = Some(Action::CellClicked(cell));
            }
        });

        action
    }

    /// Handle keyboard shortcuts
    fn handle_input(&self, ctx: &Context) -> Option<Action> {
        ctx.input(|i| {
            // S - toggle move-list sort order
            if i.key_pressed(egui::Key::S) {
                Some(Action::ToggleSortOrder)
            } else {
                None
            }
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut pending = self.handle_input(ctx);

        // Render everything from the current state; panels report the
        // action they collected, first one wins this frame
        pending = pending.or(self.render_side_panel(ctx));
        pending = pending.or(self.render_board(ctx));

        if let Some(action) = pending {
            self.state = reduce(&self.state, action);
        }
    }
}
