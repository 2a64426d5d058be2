use super::highlight::CodeHighlighter;
use crate::{
    app::{AccountSession, Action, AppContext, AppResult, AppView, FocusedPane, ViewState},
    components::Component,
    flow::{Account, format_balance},
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Language tag attached to the code block.
pub const CODE_LANGUAGE: &str = "cadence";
const LOCKED_NOTICE: &str = "As this account is locked, it can only be interacted with via already existing public and private capabilities.";
const KEY_FORMAT_HINT: &str = "index:weight:curve:hash:publicKey";
const CODE_GUTTER: &str = "│ ";

#[derive(Debug, Default)]
pub struct AccountView {
    scroll: u16,
    highlighter: CodeHighlighter,
}

#[derive(Debug, Clone, Copy)]
pub enum AccountViewCommand {
    ScrollDown,
    ScrollUp,
    ScrollTop,
    ResetScroll,
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn strong() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn heading(address: String) -> Line<'static> {
    Line::from(vec![
        Span::styled("Account: ", muted()),
        Span::styled(address, strong().fg(Color::White)),
    ])
}

fn subheading(label: &'static str, address: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, strong()),
        Span::styled(address, muted()),
    ])
}

fn bullet(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = vec![Span::styled("• ", muted())];
    all.extend(spans);
    Line::from(all)
}

/// The page for the session's current state. Runs the highlighter over the
/// code block when an account is loaded.
pub fn page_lines(
    session: &AccountSession,
    highlighter: &mut CodeHighlighter,
) -> Vec<Line<'static>> {
    let Some(requested) = session.display_address() else {
        return vec![Line::from(Span::styled(
            "Press / and enter an account address to begin",
            muted(),
        ))];
    };

    match session.state() {
        ViewState::Pending => vec![
            heading(requested.clone()),
            Line::default(),
            subheading("Fetching info for: ", requested),
        ],
        ViewState::Error => vec![
            heading(requested.clone()),
            Line::default(),
            subheading("Could NOT fetch info for: ", requested),
            bullet(vec![Span::raw("This probably means it doesn't exist")]),
        ],
        ViewState::Loaded(account) => loaded_lines(account, highlighter),
    }
}

fn loaded_lines(account: &Account, highlighter: &mut CodeHighlighter) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(account.address.prefixed()),
        Line::default(),
        bullet(vec![
            Span::styled("Balance", strong()),
            Span::styled(": ", muted()),
            Span::raw(format_balance(account.balance)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Keys", strong()),
            Span::styled(format!(" {}", account.keys.len()), muted()),
        ]),
    ];

    if account.keys.is_empty() {
        lines.push(bullet(vec![
            Span::raw("This account is "),
            Span::styled("LOCKED", strong()),
            Span::raw(" (It has "),
            Span::styled("NO KEYS", strong()),
            Span::raw(")."),
        ]));
        lines.push(bullet(vec![Span::raw(LOCKED_NOTICE)]));
    } else {
        lines.push(Line::from(Span::styled(KEY_FORMAT_HINT, muted())));
        for key in &account.keys {
            let sep = || Span::styled(":", muted());
            lines.push(bullet(vec![
                Span::styled(key.index.to_string(), strong()),
                sep(),
                Span::styled(key.weight.to_string(), strong()),
                sep(),
                Span::styled(key.sign_algo.clone(), strong()),
                sep(),
                Span::styled(key.hash_algo.clone(), strong()),
                sep(),
                Span::styled(key.public_key.clone(), strong()),
            ]));
        }
    }

    lines.push(Line::default());
    let mut code_heading = vec![
        Span::styled("Code", strong()),
        Span::styled(format!(" [{CODE_LANGUAGE}]"), muted()),
    ];
    if !account.contracts.is_empty() {
        code_heading.push(Span::styled(
            format!(" {}", account.contracts.join(", ")),
            muted(),
        ));
    }
    lines.push(Line::from(code_heading));

    for line in highlighter.highlight(&account.code) {
        let mut spans = vec![Span::styled(CODE_GUTTER, muted())];
        spans.extend(line.spans.iter().cloned());
        lines.push(Line::from(spans));
    }
    lines
}

impl Component for AccountView {
    type Command = AccountViewCommand;

    fn init(&mut self, _ctx: &mut AppContext<'_>) -> AppResult<()> {
        self.scroll = 0;
        Ok(())
    }

    fn update(
        &mut self,
        command: &Self::Command,
        ctx: &mut AppContext<'_>,
    ) -> AppResult<Option<Action>> {
        match command {
            AccountViewCommand::ScrollDown => {
                // Keep at least the last page line on screen.
                let lines = page_lines(&ctx.state.account, &mut self.highlighter).len();
                let last = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
                self.scroll = self.scroll.saturating_add(1).min(last);
            }
            AccountViewCommand::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            AccountViewCommand::ScrollTop | AccountViewCommand::ResetScroll => self.scroll = 0,
        }
        Ok(None)
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &AppView<'_>) {
        let is_focused = matches!(ctx.state.navigation.focused_pane, FocusedPane::AccountView);
        let border_style = if is_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from("[2] Account").style(border_style));

        let lines = page_lines(&ctx.state.account, &mut self.highlighter);
        let body = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block);
        frame.render_widget(body, area);
    }

    fn tick(&mut self, _ctx: &mut AppContext<'_>) -> AppResult<Option<Action>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{AppState, NavigationState},
        config::Network,
        flow::{Address, account::AccountKey, format::NO_CODE_PLACEHOLDER},
        storage::Storage,
    };
    use tempfile::tempdir;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(session: &AccountSession) -> Vec<String> {
        let mut highlighter = CodeHighlighter::default();
        page_lines(session, &mut highlighter)
            .iter()
            .map(text)
            .collect()
    }

    fn key(index: u64, public_key: &str) -> AccountKey {
        AccountKey {
            index,
            weight: 1000,
            sign_algo: "ECDSA_P256".into(),
            hash_algo: "SHA3_256".into(),
            public_key: public_key.into(),
        }
    }

    fn loaded(account: Account) -> AccountSession {
        let mut session = AccountSession::default();
        let request = match session.open(&account.address.prefixed()) {
            crate::app::Opened::Fetch { request, .. } => request,
            crate::app::Opened::Rejected(err) => panic!("{err}"),
        };
        assert!(session.resolve::<()>(request, Ok(account)));
        session
    }

    fn account(keys: Vec<AccountKey>, code: &[u8]) -> Account {
        Account {
            address: Address::parse("f8d6e0586b0a20c7").unwrap(),
            balance: Some(250_000_000),
            code: code.to_vec(),
            contracts: Vec::new(),
            keys,
        }
    }

    #[test]
    fn pending_page_names_prefixed_address() {
        let mut session = AccountSession::default();
        session.open("f8d6e0586b0a20c7");
        assert_eq!(
            render(&session),
            vec![
                "Account: 0xf8d6e0586b0a20c7",
                "",
                "Fetching info for: 0xf8d6e0586b0a20c7",
            ]
        );
    }

    #[test]
    fn error_page_explains_missing_account() {
        let mut session = AccountSession::default();
        session.open("0xnope");
        assert_eq!(
            render(&session),
            vec![
                "Account: 0xnope",
                "",
                "Could NOT fetch info for: 0xnope",
                "• This probably means it doesn't exist",
            ]
        );
    }

    #[test]
    fn locked_account_shows_notice_and_no_key_list() {
        let page = render(&loaded(account(Vec::new(), b"")));
        assert!(page.contains(&"Keys 0".to_string()));
        assert!(page.contains(&"• This account is LOCKED (It has NO KEYS).".to_string()));
        assert!(page.contains(&format!("• {LOCKED_NOTICE}")));
        assert!(!page.iter().any(|line| line == KEY_FORMAT_HINT));
        assert!(page.contains(&format!("{CODE_GUTTER}{NO_CODE_PLACEHOLDER}")));
    }

    #[test]
    fn keys_are_listed_in_received_order() {
        let keys = vec![key(2, "0xccc"), key(0, "0xaaa"), key(1, "0xbbb")];
        let page = render(&loaded(account(keys, b"pub fun main() {}")));

        let listed: Vec<&String> = page
            .iter()
            .filter(|line| line.contains(":1000:ECDSA_P256:SHA3_256:"))
            .collect();
        assert_eq!(
            listed,
            vec![
                "• 2:1000:ECDSA_P256:SHA3_256:0xccc",
                "• 0:1000:ECDSA_P256:SHA3_256:0xaaa",
                "• 1:1000:ECDSA_P256:SHA3_256:0xbbb",
            ]
        );
        assert!(page.contains(&"Keys 3".to_string()));
        assert!(!page.iter().any(|line| line.contains("LOCKED")));
    }

    #[test]
    fn loaded_page_shows_balance_and_code() {
        let page = render(&loaded(account(vec![key(0, "0xaaa")], b"pub fun main() {}")));
        assert_eq!(page[0], "Account: 0xf8d6e0586b0a20c7");
        assert!(page.contains(&"• Balance: 2.5 FLOW".to_string()));
        assert!(page.contains(&format!("Code [{CODE_LANGUAGE}]")));
        assert_eq!(page.last().unwrap(), &format!("{CODE_GUTTER}pub fun main() {{}}"));
    }

    #[test]
    fn scrolling_stops_at_the_last_page_line() {
        let temp = tempdir().unwrap();
        let mut storage = Storage::open(temp.path()).unwrap();
        let mut state = AppState {
            navigation: NavigationState::default(),
            account: AccountSession::default(),
            network: Network::Emulator,
            access_node: Network::Emulator.default_access_node().to_string(),
        };
        state.account.open("0x01");
        let mut ctx = AppContext {
            state: &mut state,
            storage: &mut storage,
        };

        let mut view = AccountView::default();
        for _ in 0..10 {
            view.update(&AccountViewCommand::ScrollDown, &mut ctx).unwrap();
        }
        // Pending page is three lines.
        assert_eq!(view.scroll, 2);

        view.update(&AccountViewCommand::ScrollUp, &mut ctx).unwrap();
        assert_eq!(view.scroll, 1);
    }
}
