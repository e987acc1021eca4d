use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::Widget,
};

/// The title shown on the menu screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo {
    pub(crate) style: Style,
}

impl Logo {
    pub(crate) const HEIGHT: u16 = 5;
    pub(crate) const WIDTH: u16 = 28;
}

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____              _        ",
     "/ ___| _ __   __ _| | _____ ",
    r"\___ \| '_ \ / _` | |/ / _ \",
     " ___) | | | | (_| |   <  __/",
    r"|____/|_| |_|\__,_|_|\_\___|",
];

impl Widget for Logo {
    /// Draws the logo horizontally centered at the top of `area`
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Center)
            .areas(area);
        Text::from_iter(SNAKE.iter().copied())
            .style(self.style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(SNAKE.len(), usize::from(Logo::HEIGHT));
        for line in SNAKE {
            assert_eq!(line.chars().count(), usize::from(Logo::WIDTH), "{line:?}");
        }
    }
}
