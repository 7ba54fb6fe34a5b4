//! Frame rendering for the game session.
//!
//! The session issues draw commands into a [`Scene`]; [`render`] then lays
//! the scene out on a ratatui frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictacbeat_core::{Board, Coord, Renderer, Symbol, TextRole};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const O_GLYPH: [&str; 3] = [" .-. ", "(   )", " '-' "];
const X_GLYPH: [&str; 3] = ["\\   /", "  X  ", "/   \\"];

/// Draw commands collected for one frame.
#[derive(Debug, Default)]
pub struct Scene {
    board: bool,
    symbols: Vec<(Coord, Symbol, bool)>,
    texts: Vec<(TextRole, String)>,
    beat: Option<bool>,
    winning_line: Option<[Coord; 3]>,
}

impl Scene {
    /// Text drawn with `role`, in draw order.
    pub fn texts_for(&self, role: TextRole) -> impl Iterator<Item = &str> {
        self.texts
            .iter()
            .filter(move |(drawn, _)| *drawn == role)
            .map(|(_, text)| text.as_str())
    }
}

impl Renderer for Scene {
    fn draw_board(&mut self) {
        self.board = true;
    }

    fn draw_symbol(&mut self, at: Coord, symbol: Symbol, highlighted: bool) {
        self.symbols.push((at, symbol, highlighted));
    }

    fn draw_text(&mut self, role: TextRole, text: &str) {
        self.texts.push((role, text.to_string()));
    }

    fn draw_beat_circle(&mut self, on_beat: bool) {
        self.beat = Some(on_beat);
    }

    fn draw_winning_line(&mut self, cells: [Coord; 3]) {
        self.winning_line = Some(cells);
    }
}

/// Screen placement of the board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    area: Rect,
}

impl BoardGeometry {
    /// Lays the board out with its top-left corner at `area`'s.
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Screen rectangle of the cell at `at`.
    pub fn cell_rect(&self, at: Coord) -> Rect {
        Rect::new(
            self.area.x + at.x as u16 * (CELL_WIDTH + 1),
            self.area.y + at.y as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Cell under the terminal position, `None` on grid lines or off-board.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        Board::coords().find(|&at| self.cell_rect(at).contains(Position::new(column, row)))
    }
}

/// Renders `scene` and returns where the board landed, if one was drawn.
pub fn render(frame: &mut Frame, scene: &Scene) -> Option<BoardGeometry> {
    let area = frame.area();
    let board_height = if scene.board { BOARD_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Length(1),            // Beat
            Constraint::Min(0),               // Text
        ])
        .split(area);

    let title = scene.texts_for(TextRole::Title).next().unwrap_or("Tic Tac Beat");
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let geometry = scene.board.then(|| {
        let geometry = BoardGeometry::new(center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT));
        draw_board(frame, &geometry, scene);
        geometry
    });

    if let Some(on_beat) = scene.beat {
        let (glyph, style) = if on_beat {
            ("(###)", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("(   )", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(
            Paragraph::new(glyph).style(style).alignment(Alignment::Center),
            chunks[2],
        );
    }

    let lines: Vec<Line> = scene
        .texts
        .iter()
        .filter(|(role, _)| *role != TextRole::Title)
        .map(|(role, text)| Line::from(Span::styled(text.clone(), text_style(*role))))
        .collect();
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, chunks[3]);

    geometry
}

fn draw_board(frame: &mut Frame, geometry: &BoardGeometry, scene: &Scene) {
    let bounds = frame.area();
    let grid = Style::default().fg(Color::DarkGray);

    for y in 1..3u16 {
        let rule = Rect::new(
            geometry.area.x,
            geometry.area.y + y * (CELL_HEIGHT + 1) - 1,
            BOARD_WIDTH,
            1,
        );
        frame.render_widget(
            Paragraph::new("-------+-------+-------").style(grid),
            rule.intersection(bounds),
        );
    }
    for y in 0..3u16 {
        for x in 1..3u16 {
            let bar = Rect::new(
                geometry.area.x + x * (CELL_WIDTH + 1) - 1,
                geometry.area.y + y * (CELL_HEIGHT + 1),
                1,
                CELL_HEIGHT,
            );
            frame.render_widget(Paragraph::new("|\n|\n|").style(grid), bar.intersection(bounds));
        }
    }

    for &(at, symbol, highlighted) in &scene.symbols {
        let winning = scene
            .winning_line
            .is_some_and(|cells| cells.contains(&at));
        let glyph = match symbol {
            Symbol::O => O_GLYPH,
            Symbol::X => X_GLYPH,
        };
        let style = if winning {
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
        } else if highlighted {
            Style::default().fg(Color::DarkGray)
        } else {
            match symbol {
                Symbol::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                Symbol::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            }
        };
        let lines: Vec<Line> = glyph.iter().map(|row| Line::from(Span::styled(*row, style))).collect();
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            geometry.cell_rect(at).intersection(bounds),
        );
    }
}

fn text_style(role: TextRole) -> Style {
    match role {
        TextRole::Title | TextRole::Heading => {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
        TextRole::MenuItem { selected: true } => {
            Style::default().fg(Color::Black).bg(Color::White)
        }
        TextRole::MenuItem { selected: false } => Style::default(),
        TextRole::Countdown => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        TextRole::Prompt => Style::default().fg(Color::Yellow),
        TextRole::Status | TextRole::Score => Style::default().fg(Color::White),
        TextRole::Judgement => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        TextRole::Banner => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        TextRole::Hint => Style::default().fg(Color::DarkGray),
    }
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
