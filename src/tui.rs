//! Terminal conversation view
//!
//! Title, scrollable transcript and an input line. The relay call runs on a
//! spawned task so the spinner keeps moving; its result comes back over a
//! channel and is applied to the session on the UI loop.

use crate::api::ApiResponse;
use crate::llm::{Message, MessageRole};
use crate::render::{format_content, Segment};
use crate::runtime::{ChatSession, RelayClient, RelayClientError};
use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const TITLE: &str = "My name is Claudius, how can I help you?";
pub const PLACEHOLDER: &str = "Ask me a question...";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Columns user turns are pushed right by, and assistant turns kept clear of
const TURN_OFFSET: usize = 6;

const PAGE: usize = 10;

type RelayResult = Result<ApiResponse, RelayClientError>;

pub struct App {
    session: ChatSession,
    /// Lines scrolled up from the bottom of the transcript
    scroll_back: usize,
    spinner: usize,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(),
            scroll_back: 0,
            spinner: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key press. Returns the conversation to send when the key
    /// started a submission.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Vec<Message>> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                let messages = self.session.begin_submit()?;
                self.scroll_back = 0;
                return Some(messages);
            }
            KeyCode::Backspace => self.session.pop_input(),
            KeyCode::Char(c) => self.session.push_input(c),
            KeyCode::Up => self.scroll_back += 1,
            KeyCode::Down => self.scroll_back = self.scroll_back.saturating_sub(1),
            KeyCode::PageUp => self.scroll_back += PAGE,
            KeyCode::PageDown => self.scroll_back = self.scroll_back.saturating_sub(PAGE),
            _ => {}
        }
        None
    }

    pub fn finish(&mut self, result: RelayResult) {
        self.session.finish(result);
        self.scroll_back = 0;
    }

    pub fn tick(&mut self) {
        self.spinner = (self.spinner + 1) % SPINNER.len();
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let [title_area, transcript_area, input_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Paragraph::new(TITLE)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(title, title_area);

        self.draw_transcript(frame, transcript_area);
        self.draw_input(frame, input_area);
    }

    fn draw_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let width = usize::from(area.width.saturating_sub(2));
        let height = usize::from(area.height.saturating_sub(2));

        let mut lines = transcript_lines(self.session.messages(), width);
        if self.session.is_busy() {
            lines.push(Line::from(Span::styled(
                format!("{} thinking...", SPINNER[self.spinner]),
                Style::default().fg(Color::Cyan),
            )));
        }

        let max_back = lines.len().saturating_sub(height);
        self.scroll_back = self.scroll_back.min(max_back);
        let offset = lines.len().saturating_sub(height) - self.scroll_back;

        let transcript = Paragraph::new(lines)
            .block(Block::bordered().title(" Conversation "))
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(transcript, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let width = usize::from(area.width.saturating_sub(2));
        let input = self.session.input();

        let (line, cursor) = if self.session.is_busy() {
            let spinner = format!("{} Loading...", SPINNER[self.spinner]);
            (Line::styled(spinner, Style::default().fg(Color::DarkGray)), None)
        } else if input.is_empty() {
            (
                Line::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
                Some(0),
            )
        } else {
            let visible = tail_chars(input, width.saturating_sub(1));
            let len = visible.chars().count();
            (Line::raw(visible.to_string()), Some(len))
        };

        let block = Block::bordered().title(" Send (Enter) · Quit (Esc) ");
        frame.render_widget(Paragraph::new(line).block(block), area);

        if let Some(col) = cursor {
            let x = area.x + 1 + u16::try_from(col).unwrap_or(0);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

/// Lay out every turn as terminal lines, wrapped to `width` columns.
pub fn transcript_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in messages {
        let (indent, name, color) = match message.role {
            MessageRole::User => (TURN_OFFSET, "You", Color::Cyan),
            MessageRole::Assistant => (0, "Claudius", Color::Magenta),
        };
        let avail = width.saturating_sub(TURN_OFFSET).max(1);
        let pad = " ".repeat(indent);

        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(
                name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));

        for segment in format_content(&message.content) {
            match &segment {
                Segment::Text(text) => {
                    for row in text.split('\n').flat_map(|l| wrap(l, avail)) {
                        lines.push(Line::from(vec![Span::raw(pad.clone()), Span::raw(row)]));
                    }
                }
                Segment::Code { code, .. } => {
                    let label = segment.label().unwrap_or_default();
                    lines.push(Line::from(vec![
                        Span::raw(pad.clone()),
                        Span::styled(
                            format!(" {label} "),
                            Style::default().fg(Color::Gray).bg(Color::DarkGray),
                        ),
                    ]));
                    let code_style = Style::default().fg(Color::White).bg(Color::Black);
                    for row in code.split('\n').flat_map(|l| wrap(l, avail)) {
                        lines.push(Line::from(vec![
                            Span::raw(pad.clone()),
                            Span::styled(row, code_style),
                        ]));
                    }
                }
            }
        }

        lines.push(Line::default());
    }

    lines
}

/// Hard-wrap a single line into rows of at most `width` characters.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() || width == 0 {
        return vec![line.to_string()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// The last `n` characters of `s`
fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let skip = count - n;
    s.char_indices()
        .nth(skip)
        .map_or("", |(idx, _)| s.split_at(idx).1)
}

/// Drive the view until the user quits.
pub async fn run<C>(terminal: &mut DefaultTerminal, client: Arc<C>) -> std::io::Result<()>
where
    C: RelayClient + 'static,
{
    let mut app = App::new();
    let mut events = EventStream::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<RelayResult>();
    let mut ticker = tokio::time::interval(Duration::from_millis(100));

    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) => {
                    if let Some(messages) = app.handle_key(key) {
                        let client = Arc::clone(&client);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let result = client.send(&messages).await;
                            // The receiver only goes away when the UI is closing
                            let _ = tx.send(result);
                        });
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(result) = rx.recv() => app.finish(result),
            _ = ticker.tick() => app.tick(),
        }
    }

    Ok(())
}
