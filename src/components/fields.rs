use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};

/// Keys never take more than this share of the line.
const MAX_KEY_FRACTION: usize = 2;
const SEPARATOR: &str = "  ";

/// Flattened payload rows rendered as an aligned `key  value` list.
pub struct FieldList<'a> {
    pub rows: &'a [(String, String)],
    pub scroll: u16,
}

impl Widget for FieldList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let key_width = key_column_width(self.rows, area.width as usize);
        let key_style = Style::default().fg(Color::Cyan);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(self.scroll as usize)
            .take(area.height as usize)
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(pad_to(key, key_width), key_style),
                    Span::raw(SEPARATOR),
                    Span::raw(value.clone()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

/// Width of the key column: the longest key, capped at half the line.
pub fn key_column_width(rows: &[(String, String)], line_width: usize) -> usize {
    let longest = rows.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    longest.min(line_width / MAX_KEY_FRACTION)
}

/// Cut or right-pad `text` to exactly `width` characters.
fn pad_to(text: &str, width: usize) -> String {
    let mut s: String = text.chars().take(width).collect();
    while s.chars().count() < width {
        s.push(' ');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|k| (k.to_string(), "v".to_string())).collect()
    }

    #[test]
    fn test_key_column_fits_longest_key() {
        assert_eq!(key_column_width(&rows(&["name", "clock.level"]), 80), 11);
    }

    #[test]
    fn test_key_column_capped_at_half_width() {
        assert_eq!(key_column_width(&rows(&["a.very.deeply.nested.field.path"]), 20), 10);
        assert_eq!(key_column_width(&[], 80), 0);
    }

    #[test]
    fn test_pad_to_exact_width() {
        assert_eq!(pad_to("name", 6), "name  ");
        assert_eq!(pad_to("players[10].stack", 7), "players");
    }

    #[test]
    fn test_render_respects_scroll() {
        let rows = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ];
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        FieldList { rows: &rows, scroll: 1 }.render(area, &mut buf);

        let first: String = (0..4).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        let second: String = (0..4).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(first, "b  2");
        assert_eq!(second, "c  3");
    }
}
