//! TUI module using ratatui.
//!
//! The draw loop stays on one task; each summarize request runs on a spawned
//! task and reports back over a channel, so input keeps working while a
//! request is outstanding.

use crate::config::Config;
use crate::service::{ServiceError, SummaryService};
use crate::summarizer::Summarizer;
use crate::summary::SummaryResponse;
use crate::view::{
    self, EntityView, View, BRAILLE_HEADING, ENTITY_HEADING, NO_TOPIC_MESSAGE, SUMMARY_HEADING,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const TITLE: &str = "Article Summarizer & Braille Converter";
const PLACEHOLDER: &str = "Enter article URL";
const KEY_HINTS: &str = "Enter: summarize  Esc: quit";

/// How long to wait for input before checking for completed requests
const TICK: Duration = Duration::from_millis(100);

/// A finished request, sent back from its task
#[derive(Debug)]
pub struct Completion {
    pub id: u64,
    pub outcome: Result<SummaryResponse, ServiceError>,
}

/// Launch the interactive UI and block until the user quits
pub async fn run(config: Config, service: SummaryService) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(config, service).run(&mut terminal).await;
    ratatui::restore();
    result
}

pub struct App {
    summarizer: Summarizer,
    search_url: String,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, service: SummaryService) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            summarizer: Summarizer::new(service),
            search_url: config.links.search_url,
            completions_tx,
            completions_rx,
            should_quit: false,
        }
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    async fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.drain_completions();

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply every request outcome that has arrived so far
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.summarizer.finish(completion.id, completion.outcome);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.summarizer.pop_char(),
            KeyCode::Char(c) => self.summarizer.push_char(c),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let Some(request) = self.summarizer.begin() else {
            return;
        };

        let service = self.summarizer.service().clone();
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = service.summarize(&request.url).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(Completion {
                id: request.id,
                outcome,
            });
        });
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [title_area, input_area, error_area, result_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(TITLE.bold()).centered(), title_area);
        self.draw_input(frame, input_area);

        let projection = view::project(self.summarizer.state(), &self.search_url);
        draw_error(frame, error_area, &projection);
        draw_results(frame, result_area, &projection);

        frame.render_widget(Paragraph::new(KEY_HINTS.dark_gray()), hint_area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let url = &self.summarizer.state().url;
        let text = if url.is_empty() {
            Line::from(PLACEHOLDER.dark_gray())
        } else {
            Line::from(url.as_str())
        };
        frame.render_widget(Paragraph::new(text).block(Block::bordered().title("URL")), area);

        let cursor_x = area.x + 1 + url.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn draw_error(frame: &mut Frame, area: Rect, projection: &View) {
    if let Some(error) = projection.error {
        frame.render_widget(Paragraph::new(error.red()), area);
    }
}

fn draw_results(frame: &mut Frame, area: Rect, projection: &View) {
    let Some(panel) = &projection.panel else {
        return;
    };

    let heading = |s: &'static str| Line::from(s.bold());
    let entity = match &panel.entity {
        EntityView::Link { label, href } => Line::from(vec![
            Span::styled(*label, Style::new().bold().blue().underlined()),
            Span::raw("  "),
            Span::raw(href.as_str()).dark_gray(),
        ]),
        EntityView::NotFound => Line::from(NO_TOPIC_MESSAGE),
    };

    let mut lines = vec![heading(SUMMARY_HEADING)];
    lines.extend(Text::raw(panel.summary).lines);
    lines.push(Line::default());
    lines.push(heading(ENTITY_HEADING));
    lines.push(entity);
    lines.push(Line::default());
    lines.push(heading(BRAILLE_HEADING));
    lines.extend(Text::raw(panel.braille_summary).lines);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered()),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::EMPTY_URL_MESSAGE;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let service = SummaryService::new("http://127.0.0.1:1/summarize").unwrap();
        App::new(Config::default(), service)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn typing_edits_url() {
        let mut app = app();
        for c in "https://x.io/ab".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.summarizer().state().url, "https://x.io/a");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
        assert!(app.summarizer().state().url.is_empty());
    }

    #[test]
    fn enter_on_empty_input_shows_validation_error() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.summarizer().state().error(), EMPTY_URL_MESSAGE);
        assert!(rendered(&app).contains(EMPTY_URL_MESSAGE));
    }

    #[test]
    fn completion_is_applied_and_rendered() {
        let mut app = app();
        app.summarizer.set_url("https://example.com/a");
        let request = app.summarizer.begin().unwrap();

        app.completions_tx
            .send(Completion {
                id: request.id,
                outcome: Ok(SummaryResponse {
                    summary: Some("A bear story.".to_string()),
                    braille_summary: Some("⠁ ⠃⠑⠁⠗ ⠎⠞⠕⠗⠽⠲".to_string()),
                    key_entity: Some("Bear".to_string()),
                }),
            })
            .unwrap();
        app.drain_completions();

        let screen = rendered(&app);
        assert!(screen.contains("A bear story."));
        assert!(screen.contains("https://news.google.com/search?q=Bear"));
        assert!(screen.contains("⠁ ⠃⠑⠁⠗ ⠎⠞⠕⠗⠽⠲"));
    }

    #[test]
    fn empty_entity_renders_fallback() {
        let mut app = app();
        app.summarizer.set_url("https://example.com/a");
        let request = app.summarizer.begin().unwrap();
        app.summarizer.finish(
            request.id,
            Ok(SummaryResponse {
                summary: Some("S".to_string()),
                braille_summary: Some("B".to_string()),
                key_entity: Some(String::new()),
            }),
        );

        assert!(rendered(&app).contains(NO_TOPIC_MESSAGE));
    }
}
