use super::util::short_hex;
use crate::{
    app::{Action, AppContext, AppResult, AppView, FocusedPane},
    components::Component,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug)]
pub struct TopBar {
    title: String,
    search_active: bool,
    search_value: String,
    status: Option<String>,
    spinner_frame: usize,
}

impl Default for TopBar {
    fn default() -> Self {
        Self {
            title: "flow-account-tui".to_string(),
            search_active: false,
            search_value: String::new(),
            status: None,
            spinner_frame: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TopCommand {
    ActivateSearch,
    InputChar(char),
    Backspace,
    Submit,
    Cancel,
    ShowStatus(String),
}

impl TopBar {
    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    fn status_line(&self, pending: bool) -> Option<Line<'_>> {
        self.status.as_ref().map(|status| {
            let text = if pending {
                format!("{} {status}", SPINNER[self.spinner_frame % SPINNER.len()])
            } else {
                status.clone()
            };
            Line::from(text).style(Style::default().fg(Color::Gray))
        })
    }
}

impl Component for TopBar {
    type Command = TopCommand;

    fn init(&mut self, _ctx: &mut AppContext<'_>) -> AppResult<()> {
        Ok(())
    }

    fn update(
        &mut self,
        command: &Self::Command,
        _ctx: &mut AppContext<'_>,
    ) -> AppResult<Option<Action>> {
        match command {
            TopCommand::ActivateSearch => {
                self.search_active = true;
                self.search_value.clear();
                self.status = Some("Type a Flow account address".into());
            }
            TopCommand::InputChar(c) => {
                if !self.search_active {
                    self.search_active = true;
                }
                self.search_value.push(*c);
            }
            TopCommand::Backspace => {
                self.search_value.pop();
            }
            TopCommand::Submit => {
                let query = self.search_value.trim().to_string();
                if query.is_empty() {
                    self.status = Some("Enter an address to look up".into());
                    return Ok(None);
                }
                self.search_active = false;
                return Ok(Some(Action::OpenAddress(query)));
            }
            TopCommand::Cancel => {
                self.search_active = false;
                self.status = Some("Search cancelled".into());
            }
            TopCommand::ShowStatus(message) => {
                self.status = Some(message.clone());
            }
        }
        Ok(None)
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &AppView<'_>) {
        let is_focused = matches!(ctx.state.navigation.focused_pane, FocusedPane::Top);
        let descriptor = match ctx.state.account.display_address() {
            Some(address) => format!("{} [{}]", short_hex(&address), ctx.state.network.label()),
            None => format!("No account [{}]", ctx.state.network.label()),
        };
        let title = Line::from(format!("[1] {} • {}", self.title, descriptor));
        let style = if is_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut lines = Vec::new();
        if self.search_active {
            let hint = Span::styled(
                format!("› {}_", self.search_value),
                Style::default().add_modifier(Modifier::BOLD),
            );
            lines.push(Line::from(vec![hint]));
            lines.push(Line::from("Enter to open • Esc to cancel"));
        } else {
            lines.push(Line::from("Press / to look up an account address"));
            lines.push(Line::from(Span::styled(
                format!("Access node: {}", ctx.state.access_node),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(status) = self.status_line(ctx.state.account.is_pending()) {
            lines.push(status);
        }

        let widget = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .block(Block::bordered().title(title.style(style)));
        frame.render_widget(widget, area);
    }

    fn tick(&mut self, ctx: &mut AppContext<'_>) -> AppResult<Option<Action>> {
        if ctx.state.account.is_pending() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        } else {
            self.spinner_frame = 0;
        }
        Ok(None)
    }
}
