// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Full-screen terminal dialogs drawn with ratatui.
//
// Each dialog takes over the alternate screen for as long as it is open and
// hands the terminal back before returning, so plain stdout output between
// dialogs lands in the normal scrollback.

use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use printergeist_core::error::{PrintergeistError, Result};

use super::Dialogs;
use crate::theme::Theme;

/// Narrowest dialog box, border included.
const MIN_WIDTH: u16 = 40;
/// Columns/rows kept free between the dialog and the screen edge.
const SCREEN_MARGIN: u16 = 2;
/// Lines moved by PageUp/PageDown in a message dialog.
const PAGE: u16 = 10;

/// Dialogs rendered on the controlling terminal.
pub struct TerminalDialogs {
    theme: Theme,
}

impl TerminalDialogs {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Open `dialog` on the alternate screen until it produces an answer.
    fn run<D: Dialog>(&self, mut dialog: D) -> Result<D::Output> {
        let mut terminal = ratatui::try_init().map_err(terminal_error)?;
        let result = self.event_loop(&mut terminal, &mut dialog);
        ratatui::restore();
        result
    }

    fn event_loop<D: Dialog>(
        &self,
        terminal: &mut DefaultTerminal,
        dialog: &mut D,
    ) -> Result<D::Output> {
        loop {
            terminal
                .draw(|frame| dialog.render(frame, &self.theme))
                .map_err(terminal_error)?;

            if let Event::Key(key) = event::read().map_err(terminal_error)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(output) = dialog.handle_key(key) {
                    return Ok(output);
                }
            }
        }
    }
}

impl Default for TerminalDialogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialogs for TerminalDialogs {
    fn input(&mut self, title: &str, text: &str) -> Result<Option<String>> {
        debug!(title, "opening input dialog");
        self.run(InputDialog::new(title, text))
    }

    fn choose(&mut self, title: &str, text: &str, buttons: &[&str]) -> Result<Option<usize>> {
        debug!(title, "opening button dialog");
        self.run(ButtonDialog::new(title, text, buttons))
    }

    fn message(&mut self, title: &str, text: &str) -> Result<()> {
        debug!(title, "opening message dialog");
        self.run(MessageDialog::new(title, text))
    }

    fn echo(&mut self, line: &str) {
        println!("{line}");
    }
}

fn terminal_error(e: io::Error) -> PrintergeistError {
    PrintergeistError::Terminal(e.to_string())
}

// ---------------------------------------------------------------------------
// Dialog kinds
// ---------------------------------------------------------------------------

trait Dialog {
    type Output;

    fn render(&self, frame: &mut Frame, theme: &Theme);

    /// Feed one key press; `Some` closes the dialog with that answer.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output>;
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Text entry. Enter accepts, Esc or Ctrl-C cancels.
struct InputDialog<'a> {
    title: &'a str,
    text: Text<'a>,
    value: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl<'a> InputDialog<'a> {
    fn new(title: &'a str, text: &'a str) -> Self {
        Self {
            title,
            text: Text::from(text),
            value: String::new(),
            cursor: 0,
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

impl Dialog for InputDialog<'_> {
    type Output = Option<String>;

    fn render(&self, frame: &mut Frame, theme: &Theme) {
        let (width, height) = text_size(&self.text);
        let inner = draw_frame(frame, theme, self.title, width.max(50), height + 4);
        let [body, _, field, _, hint] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.text.clone())
                .style(theme.body)
                .wrap(Wrap { trim: false }),
            body,
        );

        // Scroll the field horizontally so the cursor stays visible.
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = 0;
        while start < self.cursor && display_width(&chars[start..self.cursor]) >= field.width as usize
        {
            start += 1;
        }
        let visible: String = chars[start..].iter().collect();
        frame.render_widget(Paragraph::new(visible).style(theme.field), field);

        let offset = display_width(&chars[start..self.cursor]) as u16;
        let x = (field.x + offset).min(field.right().saturating_sub(1));
        frame.set_cursor_position((x, field.y));

        frame.render_widget(
            Paragraph::new(Line::from("<Enter> OK    <Esc> Cancel").centered()).style(theme.hint),
            hint,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output> {
        if is_interrupt(&key) {
            return Some(None);
        }
        match key.code {
            KeyCode::Enter => return Some(Some(self.value.clone())),
            KeyCode::Esc => return Some(None),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                self.cursor = 0;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let idx = self.byte_index();
                self.value.insert(idx, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let idx = self.byte_index();
                self.value.remove(idx);
            }
            KeyCode::Delete if self.cursor < self.char_count() => {
                let idx = self.byte_index();
                self.value.remove(idx);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => {}
        }
        None
    }
}

/// A message with a row of buttons. Answers with the chosen index, or
/// `None` when dismissed with Esc.
struct ButtonDialog<'a> {
    title: &'a str,
    text: Text<'a>,
    buttons: &'a [&'a str],
    selected: usize,
}

impl<'a> ButtonDialog<'a> {
    fn new(title: &'a str, text: &'a str, buttons: &'a [&'a str]) -> Self {
        Self {
            title,
            text: Text::from(text),
            buttons,
            selected: 0,
        }
    }
}

impl Dialog for ButtonDialog<'_> {
    type Output = Option<usize>;

    fn render(&self, frame: &mut Frame, theme: &Theme) {
        let buttons = button_line(self.buttons, Some(self.selected), theme);
        let (width, height) = text_size(&self.text);
        let width = width.max(buttons.width() as u16);
        let inner = draw_frame(frame, theme, self.title, width, height + 2);
        render_body_and_buttons(frame, theme, inner, &self.text, 0, buttons);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output> {
        if is_interrupt(&key) {
            return Some(None);
        }
        let last = self.buttons.len().saturating_sub(1);
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                return Some((!self.buttons.is_empty()).then_some(self.selected));
            }
            KeyCode::Esc => return Some(None),
            KeyCode::Left | KeyCode::BackTab => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right => self.selected = (self.selected + 1).min(last),
            KeyCode::Tab => {
                self.selected = if self.selected >= last { 0 } else { self.selected + 1 };
            }
            _ => {}
        }
        None
    }
}

/// A scrollable message with a single Ok button.
struct MessageDialog<'a> {
    title: &'a str,
    text: Text<'a>,
    scroll: u16,
}

impl<'a> MessageDialog<'a> {
    fn new(title: &'a str, text: &'a str) -> Self {
        Self {
            title,
            text: Text::from(text),
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.text.height().saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

impl Dialog for MessageDialog<'_> {
    type Output = ();

    fn render(&self, frame: &mut Frame, theme: &Theme) {
        let buttons = button_line(&["Ok"], Some(0), theme);
        let (width, height) = text_size(&self.text);
        let inner = draw_frame(frame, theme, self.title, width, height + 2);
        render_body_and_buttons(frame, theme, inner, &self.text, self.scroll, buttons);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output> {
        if is_interrupt(&key) {
            return Some(());
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => return Some(()),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = (self.scroll + PAGE).min(self.max_scroll()),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Drawing helpers
// ---------------------------------------------------------------------------

/// Paint the background, shadow, and bordered box. Returns the padded area
/// inside the border.
fn draw_frame(
    frame: &mut Frame,
    theme: &Theme,
    title: &str,
    content_width: u16,
    content_height: u16,
) -> Rect {
    let screen = frame.area();
    frame.render_widget(Block::new().style(theme.screen), screen);

    let max_width = screen.width.saturating_sub(SCREEN_MARGIN * 2);
    let max_height = screen.height.saturating_sub(SCREEN_MARGIN * 2);
    let width = content_width.saturating_add(4).max(MIN_WIDTH).min(max_width);
    let height = content_height.saturating_add(2).min(max_height);
    let area = centered(screen, width, height);

    let shadow = Rect {
        x: area.x + 1,
        y: area.y + 1,
        ..area
    }
    .intersection(screen);
    frame.render_widget(Block::new().style(theme.shadow), shadow);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(Line::from(format!(" {title} ")).centered())
        .title_style(theme.frame_label)
        .border_style(theme.body)
        .style(theme.body);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner.inner(Margin::new(1, 0))
}

fn render_body_and_buttons(
    frame: &mut Frame,
    theme: &Theme,
    inner: Rect,
    text: &Text<'_>,
    scroll: u16,
    buttons: Line<'static>,
) {
    let [body, _, row] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(text.clone())
            .style(theme.body)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        body,
    );
    frame.render_widget(Paragraph::new(buttons), row);
}

fn button_line(labels: &[&str], selected: Option<usize>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", theme.body));
        }
        let style = if selected == Some(i) {
            theme.button_focused
        } else {
            theme.button
        };
        spans.push(Span::styled(format!("< {label} >"), style));
    }
    Line::from(spans).centered()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Display size of a text block as (columns, rows).
fn text_size(text: &Text<'_>) -> (u16, u16) {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
    (width, height)
}

fn display_width(chars: &[char]) -> usize {
    Line::from(chars.iter().collect::<String>()).width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(dialog: &mut InputDialog<'_>, text: &str) {
        for c in text.chars() {
            assert!(dialog.handle_key(key(KeyCode::Char(c))).is_none());
        }
    }

    fn screen_text<D: Dialog>(dialog: &D) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| dialog.render(frame, &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn input_returns_typed_text_on_enter() {
        let mut dialog = InputDialog::new("T", "path?");
        type_text(&mut dialog, "/tmp/a.pdf");
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            Some(Some("/tmp/a.pdf".to_string()))
        );
    }

    #[test]
    fn input_empty_enter_returns_empty_string() {
        let mut dialog = InputDialog::new("T", "path?");
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(Some(String::new())));
    }

    #[test]
    fn input_escape_and_ctrl_c_cancel() {
        let mut dialog = InputDialog::new("T", "path?");
        type_text(&mut dialog, "abc");
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(None));

        let mut dialog = InputDialog::new("T", "path?");
        assert_eq!(dialog.handle_key(ctrl('c')), Some(None));
    }

    #[test]
    fn input_editing_keys() {
        let mut dialog = InputDialog::new("T", "path?");
        type_text(&mut dialog, "résumé");
        dialog.handle_key(key(KeyCode::Backspace));
        dialog.handle_key(key(KeyCode::Home));
        dialog.handle_key(key(KeyCode::Delete));
        dialog.handle_key(key(KeyCode::Right));
        type_text(&mut dialog, "X");
        assert_eq!(dialog.value, "éXsum");

        dialog.handle_key(ctrl('u'));
        assert_eq!(dialog.value, "");
        assert_eq!(dialog.cursor, 0);
    }

    #[test]
    fn buttons_move_and_select() {
        let buttons = ["INIT", "EXIT"];
        let mut dialog = ButtonDialog::new("T", "menu", &buttons);
        assert!(dialog.handle_key(key(KeyCode::Right)).is_none());
        assert!(dialog.handle_key(key(KeyCode::Right)).is_none());
        assert_eq!(dialog.selected, 1);
        assert!(dialog.handle_key(key(KeyCode::Left)).is_none());
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(Some(0)));
    }

    #[test]
    fn tab_wraps_around() {
        let buttons = ["INIT", "EXIT"];
        let mut dialog = ButtonDialog::new("T", "menu", &buttons);
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.selected, 0);
    }

    #[test]
    fn buttons_escape_dismisses() {
        let buttons = ["INIT", "EXIT"];
        let mut dialog = ButtonDialog::new("T", "menu", &buttons);
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(None));
    }

    #[test]
    fn message_scrolls_within_bounds() {
        let mut dialog = MessageDialog::new("T", "a\nb\nc");
        dialog.handle_key(key(KeyCode::PageDown));
        assert_eq!(dialog.scroll, 2);
        dialog.handle_key(key(KeyCode::Up));
        assert_eq!(dialog.scroll, 1);
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(()));
    }

    #[test]
    fn menu_renders_title_and_buttons() {
        let buttons = ["INIT", "EXIT"];
        let dialog = ButtonDialog::new("PRINTERGEIST", "pick one", &buttons);
        let screen = screen_text(&dialog);
        assert!(screen.contains("PRINTERGEIST"));
        assert!(screen.contains("pick one"));
        assert!(screen.contains("< INIT >"));
        assert!(screen.contains("< EXIT >"));
    }

    #[test]
    fn input_renders_typed_value() {
        let mut dialog = InputDialog::new("FILE", "* FILE PATH FOR PRINTING");
        type_text(&mut dialog, "/srv/doc.pdf");
        let screen = screen_text(&dialog);
        assert!(screen.contains("* FILE PATH FOR PRINTING"));
        assert!(screen.contains("/srv/doc.pdf"));
    }

    #[test]
    fn message_renders_in_tiny_terminal() {
        let dialog = MessageDialog::new("Error", "No printer found.");
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| dialog.render(frame, &Theme::default()))
            .unwrap();
    }
}
