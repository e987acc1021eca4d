use crate::config::Theme;
use crate::consts;
use crate::engine::{Board, Phase, Position, RenderState};
use crate::logo::Logo;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};

/// Everything drawn for one frame: the menu, the board, or the board with the
/// game-over overlay, depending on the phase
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Screen<'a> {
    state: RenderState<'a>,
    theme: &'a Theme,
}

impl<'a> Screen<'a> {
    pub(crate) fn new(state: RenderState<'a>, theme: &'a Theme) -> Screen<'a> {
        Screen { state, theme }
    }

    fn text_style(&self) -> Style {
        Style::new().fg(self.theme.text)
    }

    fn render_menu(&self, display: Rect, buf: &mut Buffer) {
        Block::new()
            .style(Style::new().bg(self.theme.light_square))
            .render(display, buf);
        let [logo_area, heading_area, controls_area] = Layout::vertical([Logo::HEIGHT, 1, 1])
            .flex(Flex::Center)
            .spacing(1)
            .areas(display);
        Logo {
            style: self.text_style().add_modifier(consts::HEADING_MODIFIER),
        }
        .render(logo_area, buf);
        Line::styled(
            "Controls",
            self.text_style().add_modifier(consts::HEADING_MODIFIER),
        )
        .centered()
        .render(heading_area, buf);
        Line::from_iter([
            Span::raw("<"),
            Span::styled("w,a,s,d", consts::KEY_STYLE),
            Span::raw("> to move, <"),
            Span::styled("space", consts::KEY_STYLE),
            Span::raw("> to reset."),
        ])
        .style(self.text_style())
        .centered()
        .render(controls_area, buf);
    }

    fn render_game(&self, layout: &GameLayout, buf: &mut Buffer) {
        Line::styled(
            format!("Score: {}", self.state.score),
            self.text_style().add_modifier(consts::HEADING_MODIFIER),
        )
        .centered()
        .render(layout.score, buf);

        let mut board = Canvas {
            area: layout.board,
            buf,
        };
        for pos in self.state.board.positions() {
            let color = if (pos.row + pos.col) % 2 == 0 {
                self.theme.dark_square
            } else {
                self.theme.light_square
            };
            board.fill_cell(pos, Style::new().bg(color));
        }
        board.fill_cell(self.state.food, Style::new().bg(self.theme.food));
        for &pos in self.state.body {
            board.fill_cell(pos, Style::new().bg(self.theme.snake));
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head_color = if self.state.phase == Phase::Ended {
            self.theme.game_over
        } else {
            self.theme.snake
        };
        board.fill_cell(self.state.head, Style::new().bg(head_color));

        Line::from_iter([
            Span::raw("Press <"),
            Span::styled("space", consts::KEY_STYLE),
            Span::raw("> to reset."),
        ])
        .style(self.text_style())
        .centered()
        .render(layout.hint, buf);
    }

    fn render_game_over(&self, layout: &GameLayout, buf: &mut Buffer) {
        const TEXT: &str = "GAME OVER";
        let area = center_rect(layout.board, Size::new(GAME_OVER_WIDTH, 3));
        let style = Style::new()
            .fg(self.theme.game_over)
            .bg(self.theme.light_square)
            .add_modifier(consts::HEADING_MODIFIER);
        let block = Block::bordered().style(style);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        Line::styled(TEXT, style).centered().render(inner, buf);
    }
}

/// Width of the game-over pop-up, including its border
const GAME_OVER_WIDTH: u16 = 15;

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        if self.state.phase == Phase::Menu {
            self.render_menu(display, buf);
            return;
        }
        let layout = GameLayout::new(display, self.state.board);
        self.render_game(&layout, buf);
        if self.state.phase == Phase::Ended {
            self.render_game_over(&layout, buf);
        }
    }
}

/// Where the parts of the in-game screen go
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameLayout {
    score: Rect,
    board: Rect,
    hint: Rect,
}

impl GameLayout {
    fn new(display: Rect, board: Board) -> GameLayout {
        let [score, board_area, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let board_rect = center_rect(
            board_area,
            Size {
                width: board.cols().saturating_mul(consts::CELL_WIDTH),
                height: board.rows(),
            },
        );
        GameLayout {
            score,
            board: board_rect,
            hint,
        }
    }
}

/// Draws board cells into the rectangle occupied by the board.  Cells outside
/// the rectangle are skipped.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn fill_cell(&mut self, pos: Position, style: Style) {
        let (Ok(row), Ok(col)) = (u16::try_from(pos.row), u16::try_from(pos.col)) else {
            return;
        };
        if row >= self.area.height {
            return;
        }
        let Some(x0) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|dx| self.area.x.checked_add(dx))
        else {
            return;
        };
        let y = self.area.y + row;
        for x in x0..x0.saturating_add(consts::CELL_WIDTH).min(self.area.right()) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
