use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::fields::FieldList;
use crate::routes::Route;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

const KEY_LEGEND: &str = "Keys: r=reload  j/k=scroll  v=raw/fields  g=go to  f=full screen  \"=logs  q=quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(
            f.area(),
            app.settings.full_screen,
            app.state.show_logs,
            app.state.route_prompt.is_some(),
        );

        if !app.settings.full_screen {
            draw_header(f, layout.header, app);
        }

        draw_tournament(f, layout.main, app);

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
        if let Some(prompt) = layout.prompt {
            draw_route_prompt(f, prompt, app);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, header: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let title = app
        .state
        .tournament
        .fetched
        .as_ref()
        .and_then(|fetched| fetched.data.title())
        .map(str::to_string)
        .or_else(|| app.state.tournament.id.as_ref().map(|id| format!("Tournament {id}")))
        .unwrap_or_default();

    let route = Paragraph::new(Line::from(vec![
        Span::styled(
            app.state.route.to_path(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw("  "),
        Span::raw(title),
    ]))
    .block(
        Block::default()
            .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
            .border_type(border_type),
    )
    .style(style);
    f.render_widget(route, header[0]);

    let source = match (
        app.state.tournament.fetched.as_ref(),
        app.state.tournament.last_updated.as_deref(),
    ) {
        (Some(fetched), Some(at)) => format!("{} @ {at} ", fetched.endpoint.label()),
        _ => String::new(),
    };
    let status = Paragraph::new(source)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(status, header[1]);
}

fn draw_tournament(f: &mut Frame, area: Rect, app: &mut App) {
    let block = default_border(Color::White).title(" Tournament ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let Some(fetched) = app.state.tournament.fetched.as_ref() else {
        let (msg, color) = match (app.state.last_error.as_deref(), &app.state.route) {
            (Some(err), Route::NotFound) => (err.to_string(), Color::Yellow),
            (Some(err), _) => (format!("Tournament load failed:\n{err}"), Color::Red),
            (None, _) => ("Loading tournament data...".to_string(), Color::DarkGray),
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(color))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    };

    let [key_legend, error_line, content] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if app.state.last_error.is_some() { 1 } else { 0 }),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(KEY_LEGEND).style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );
    if let Some(err) = app.state.last_error.as_deref() {
        // Reload failed; the payload below is from the previous load.
        f.render_widget(
            Paragraph::new(format!("Reload failed: {err}")).style(Style::default().fg(Color::Red)),
            error_line,
        );
    }

    let data = &fetched.data;
    if app.state.tournament.raw_view {
        let pretty = serde_json::to_string_pretty(data.as_value())
            .unwrap_or_else(|_| data.as_value().to_string());
        let paragraph = Paragraph::new(pretty).wrap(Wrap { trim: false });
        let max_offset = paragraph
            .line_count(content.width)
            .saturating_sub(content.height as usize);
        app.clamp_scroll(u16::try_from(max_offset).unwrap_or(u16::MAX));
        f.render_widget(
            paragraph.scroll((app.state.tournament.scroll_offset, 0)),
            content,
        );
    } else {
        let rows = data.rows();
        let max_offset = rows.len().saturating_sub(content.height as usize);
        app.clamp_scroll(u16::try_from(max_offset).unwrap_or(u16::MAX));
        f.render_widget(
            FieldList { rows: &rows, scroll: app.state.tournament.scroll_offset },
            content,
        );
    }
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray))
        .style_debug(Style::default().fg(Color::DarkGray));
    f.render_widget(logs, area);
}

fn draw_route_prompt(f: &mut Frame, area: Rect, app: &App) {
    let typed = app.state.route_prompt.as_deref().unwrap_or_default();
    let prompt = Paragraph::new(format!("{typed}_"))
        .block(default_border(Color::Yellow).title(" Go to (path or id, Enter/Esc) "));
    f.render_widget(prompt, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
