use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use webbrowser::Browser;

use super::{centered, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::{App, AppState};

/// A UI Screen boundary: draws one app state
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Question screen - current prompt and its shuffled options
pub struct QuestionScreen;

/// Result screen - winning animal, share text and retake
pub struct ResultScreen;

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: AppState) -> Box<dyn Screen> {
    match state {
        AppState::Question => Box::new(QuestionScreen),
        AppState::Result => Box::new(ResultScreen),
    }
}

impl Screen for QuestionScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Ok(question) = app.session.current_question() else {
            return;
        };

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let highlight_style = Style::default()
            .patch(bold_style)
            .fg(Color::Black)
            .bg(Color::Magenta);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let option_lines = question.options.len() as u16;
        let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_lines = (question.prompt.width() as f64 / inner_width as f64)
            .ceil()
            .max(1.0) as u16;
        let content_height = 2 + prompt_lines + 1 + option_lines + 2;
        let top_padding = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(top_padding),
                Constraint::Length(2),            // header
                Constraint::Length(prompt_lines), // prompt
                Constraint::Length(1),            // padding
                Constraint::Length(option_lines), // options
                Constraint::Length(1),            // status
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let header = Paragraph::new(Span::styled(
            format!(
                "Question {} of {}",
                app.session.question_number(),
                app.session.len()
            ),
            dim_style.patch(bold_style),
        ))
        .alignment(Alignment::Center);
        header.render(chunks[1], buf);

        let prompt = Paragraph::new(Span::styled(question.prompt, bold_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        prompt.render(chunks[2], buf);

        // center the option block as a whole so the numbers line up
        let widest = question
            .options
            .iter()
            .map(|o| o.text.width() + 5)
            .max()
            .unwrap_or(0) as u16;
        let options_area = centered(chunks[4], widest);

        let lines: Vec<Line> = question
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let label = format!(" {}. {} ", idx + 1, option.text);
                if idx == app.cursor {
                    Line::from(Span::styled(label, highlight_style))
                } else {
                    Line::from(Span::raw(label))
                }
            })
            .collect();
        Paragraph::new(lines).render(options_area, buf);

        if let Some(status) = &app.status {
            Paragraph::new(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
        }

        let legend = Paragraph::new(Span::styled(
            format!(
                "(↑/↓) move / (enter) select / (1-{}) pick / (esc)ape",
                question.options.len()
            ),
            italic_style,
        ));
        legend.render(chunks[7], buf);
    }
}

impl Screen for ResultScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(result) = app.session.result() else {
            return;
        };

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // title
                Constraint::Length(1), // padding
                Constraint::Length(3), // image
                Constraint::Length(1), // padding
                Constraint::Length(2), // blurb
                Constraint::Length(1), // share text
                Constraint::Length(1), // status
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let title = Paragraph::new(Span::styled(
            format!("You're a {result}!"),
            green_bold_style,
        ))
        .alignment(Alignment::Center);
        title.render(chunks[1], buf);

        let image_path = result.image_path();
        let image = Paragraph::new(Span::styled(image_path, Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL).title(result.to_string()))
            .alignment(Alignment::Center);
        image.render(centered(chunks[3], image_path.width() as u16 + 8), buf);

        let blurb = Paragraph::new(
            "Discover more about your animal personality by sharing your result!",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        blurb.render(chunks[5], buf);

        if let Some(text) = app.share_text() {
            Paragraph::new(Span::styled(
                text,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
        }

        if let Some(status) = &app.status {
            Paragraph::new(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center)
            .render(chunks[7], buf);
        }

        let legend = Paragraph::new(Span::styled(
            if Browser::is_available() {
                "(s)hare / (r)etake / (esc)ape"
            } else {
                "(r)etake / (esc)ape"
            },
            italic_style,
        ));
        legend.render(chunks[9], buf);
    }
}
