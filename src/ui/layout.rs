use tui::layout::{Constraint, Layout, Rect, Size};
pub const HEADER_HEIGHT: u16 = 3;
pub const LOG_PANE_HEIGHT: u16 = 10;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub header: [Rect; 2],
    pub main: Rect,
    pub logs: Option<Rect>,
    pub prompt: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false, false, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool, show_logs: bool, show_prompt: bool) {
        *self = Self::from_rect(area, full_screen, show_logs, show_prompt);
    }

    fn from_rect(area: Rect, full_screen: bool, show_logs: bool, show_prompt: bool) -> Self {
        let (header, body) = if full_screen {
            ([Rect::ZERO, Rect::ZERO], area)
        } else {
            let [header, body] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)]).areas(area);
            (Self::split_header(header), body)
        };

        let (body, prompt) = if show_prompt {
            let [body, prompt] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(body);
            (body, Some(prompt))
        } else {
            (body, None)
        };

        let (main, logs) = if show_logs {
            let [main, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(body);
            (main, Some(logs))
        } else {
            (body, None)
        };

        LayoutAreas { header, main, logs, prompt }
    }

    fn split_header(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen_hides_header() {
        let mut layout = LayoutAreas::new(Size::new(80, 40));
        layout.update(Rect::new(0, 0, 80, 40), true, false, false);
        assert_eq!(layout.header, [Rect::ZERO, Rect::ZERO]);
        assert_eq!(layout.main, Rect::new(0, 0, 80, 40));
    }

    #[test]
    fn test_logs_and_prompt_take_space_from_main() {
        let mut layout = LayoutAreas::new(Size::new(80, 40));
        layout.update(Rect::new(0, 0, 80, 40), false, true, true);
        assert_eq!(layout.main.height, 40 - HEADER_HEIGHT - 3 - LOG_PANE_HEIGHT);
        assert_eq!(layout.logs.map(|r| r.height), Some(LOG_PANE_HEIGHT));
        assert_eq!(layout.prompt.map(|r| r.height), Some(3));
    }
}
