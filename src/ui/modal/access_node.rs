use crate::{
    app::{Action, AppContext, AppResult, AppView},
    components::Component,
    config::validate_access_node,
    storage::SettingKey,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::cmp::min;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessNodeModalCommand {
    InputChar(char),
    Backspace,
    ClearField,
    Submit,
    Cancel,
    Quit,
}

/// Edits the Flow REST access node URL.
#[derive(Debug, Default)]
pub struct AccessNodeModal {
    value: String,
    message: Option<String>,
}

impl AccessNodeModal {
    pub fn command_from_key(event: KeyEvent) -> Option<AccessNodeModalCommand> {
        match (event.modifiers, event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                Some(AccessNodeModalCommand::Quit)
            }
            (_, KeyCode::Esc) => Some(AccessNodeModalCommand::Cancel),
            (_, KeyCode::Enter) => Some(AccessNodeModalCommand::Submit),
            (_, KeyCode::Backspace) => Some(AccessNodeModalCommand::Backspace),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                Some(AccessNodeModalCommand::ClearField)
            }
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AccessNodeModalCommand::InputChar(c))
            }
            _ => None,
        }
    }

    /// An empty field drops the stored URL and falls back to the network default.
    fn save(&mut self, ctx: &mut AppContext<'_>) -> AppResult<Option<Action>> {
        if self.value.trim().is_empty() {
            ctx.storage.settings().remove(SettingKey::AccessNodeUrl)?;
            let url = ctx.state.network.default_access_node().to_string();
            self.value = url.clone();
            self.message = Some("Access node reset to network default".into());
            return Ok(Some(Action::AccessNodeSaved(url)));
        }
        if let Err(message) = validate_access_node(&self.value) {
            self.message = Some(message.to_string());
            return Ok(None);
        }

        let url = self.value.trim().to_string();
        ctx.storage.settings().set(SettingKey::AccessNodeUrl, &url)?;
        self.message = Some("Access node saved".into());
        Ok(Some(Action::AccessNodeSaved(url)))
    }

    fn centered_rect(&self, width: u16, height: u16, area: Rect) -> Rect {
        let width = min(width, area.width);
        let height = min(height, area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Component for AccessNodeModal {
    type Command = AccessNodeModalCommand;

    fn init(&mut self, ctx: &mut AppContext<'_>) -> AppResult<()> {
        self.value = ctx.state.access_node.clone();
        self.message = None;
        Ok(())
    }

    fn update(
        &mut self,
        command: &Self::Command,
        ctx: &mut AppContext<'_>,
    ) -> AppResult<Option<Action>> {
        match command {
            AccessNodeModalCommand::InputChar(c) => {
                self.value.push(*c);
                self.message = None;
            }
            AccessNodeModalCommand::Backspace => {
                self.value.pop();
            }
            AccessNodeModalCommand::ClearField => self.value.clear(),
            AccessNodeModalCommand::Submit => return self.save(ctx),
            AccessNodeModalCommand::Cancel => return Ok(Some(Action::CloseModal)),
            AccessNodeModalCommand::Quit => return Ok(Some(Action::Quit)),
        }
        Ok(None)
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &AppView<'_>) {
        let modal_area = self.centered_rect(72, 9, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(Span::styled(
                format!("Access Node • {}", ctx.state.network.label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(inner);

        let intro = Paragraph::new(Text::raw("Flow REST API endpoint used for account lookups."))
            .alignment(Alignment::Center);
        frame.render_widget(intro, chunks[0]);

        let shown = if self.value.trim().is_empty() {
            "<network default>"
        } else {
            self.value.as_str()
        };
        let field = Paragraph::new(Line::from(vec![
            Span::styled(
                "URL: ",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                shown.to_string(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " ▌",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(field, chunks[1]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Clear with Ctrl+U • Submit empty to use the network default",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(hint, chunks[2]);

        let status_line = match self.message.as_ref() {
            Some(message) => Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => Paragraph::new(Span::styled(
                "Submit with Enter. Cancel with Esc.",
                Style::default().fg(Color::Gray),
            )),
        };
        frame.render_widget(status_line, chunks[3]);
    }

    fn tick(&mut self, _ctx: &mut AppContext<'_>) -> AppResult<Option<Action>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            AccessNodeModal::command_from_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AccessNodeModalCommand::Cancel)
        );
        assert_eq!(
            AccessNodeModal::command_from_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(AccessNodeModalCommand::ClearField)
        );
        assert_eq!(
            AccessNodeModal::command_from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AccessNodeModalCommand::Quit)
        );
        assert_eq!(
            AccessNodeModal::command_from_key(key(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(AccessNodeModalCommand::InputChar('H'))
        );
        assert_eq!(
            AccessNodeModal::command_from_key(key(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let modal = AccessNodeModal::default();
        let area = Rect::new(0, 0, 40, 6);
        assert_eq!(modal.centered_rect(72, 9, area), Rect::new(0, 0, 40, 6));
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(modal.centered_rect(72, 9, area), Rect::new(14, 10, 72, 9));
    }
}
