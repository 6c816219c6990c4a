//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_core::{Board, Position, Square, Symbol};

use super::app::{App, Mode};

const HELP: &str =
    "arrows move · Enter place · 1-9 quick place · x/o rename · r restart · q quit";

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(17),   // Game + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(28)])
        .split(chunks[1]);

    let game = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Players
            Constraint::Length(13), // Board
            Constraint::Min(0),     // Game over banner
        ])
        .split(columns[0]);

    draw_players(frame, game[0], app);
    draw_board(frame, game[1], &app.session().board(), app.cursor());
    draw_game_over(frame, game[2], app);
    draw_history(frame, columns[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let active = (!session.is_over()).then(|| session.active_player());

    let lines: Vec<Line> = [Symbol::X, Symbol::O]
        .into_iter()
        .map(|symbol| {
            let name = match app.mode() {
                Mode::Editing { symbol: editing, buffer } if *editing == symbol => {
                    Span::styled(
                        format!("{}_", buffer),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    )
                }
                _ => Span::raw(session.registry().name(symbol).to_string()),
            };
            let marker = if active == Some(symbol) { "▶ " } else { "  " };
            let mut line = Line::from(vec![
                Span::raw(marker),
                name,
                Span::raw("  "),
                Span::styled(symbol.to_string(), symbol_style(symbol)),
            ]);
            if active == Some(symbol) {
                line = line.style(Style::default().add_modifier(Modifier::BOLD));
            }
            line
        })
        .collect();

    let players =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(players, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_coords(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(symbol) => (format!(" {} ", symbol), symbol_style(symbol)),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center within the 3-line cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let outcome = app.session().outcome();
    if !outcome.is_over() || area.height == 0 {
        return;
    }

    let text = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(outcome.to_string()),
        Line::from("Press 'r' for a rematch."),
    ];
    let banner = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session()
        .log()
        .iter()
        .map(|mv| ListItem::new(mv.to_string()).style(symbol_style(mv.player)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
