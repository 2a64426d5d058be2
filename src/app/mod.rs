use crate::{
    components::Component,
    config::{Config, Network},
    flow::{AccessClient, Account, Address},
    storage::{SettingKey, Storage},
    ui::{
        account_view::{AccountView, AccountViewCommand},
        bottom_bar::BottomBar,
        modal::access_node::{AccessNodeModal, AccessNodeModalCommand},
        top::{TopBar, TopCommand},
    },
};
pub type AppResult<T> = color_eyre::Result<T>;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use std::{sync::mpsc, time::Duration};
use tokio::runtime::{Handle, Runtime};

mod session;

pub use navigation::FocusedPane;
pub use session::{AccountSession, Opened, RequestId, ViewState};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Central application type that orchestrates state and delegates to UI components.
pub struct App {
    running: bool,
    pub state: AppState,
    pub storage: Storage,
    client: AccessClient,
    timeout: Duration,
    top_bar: TopBar,
    account_view: AccountView,
    bottom_bar: BottomBar,
    access_node_modal: AccessNodeModal,
    #[allow(dead_code)]
    runtime: Runtime,
    runtime_handle: Handle,
    message_rx: mpsc::Receiver<Message>,
    message_tx: mpsc::Sender<Message>,
}

impl App {
    pub fn new(config: Config, mut storage: Storage) -> AppResult<Self> {
        let mut state = AppState {
            navigation: NavigationState::default(),
            account: AccountSession::default(),
            network: config.network,
            access_node: config.access_node.url.clone(),
        };
        let client = AccessClient::new(&config.access_node.url, config.timeout)
            .wrap_err("failed to build access node client")?;
        let mut top_bar = TopBar::default();
        let mut account_view = AccountView::default();
        let mut bottom_bar = BottomBar;
        let mut access_node_modal = AccessNodeModal::default();
        let runtime = Runtime::new()?;
        let runtime_handle = runtime.handle().clone();
        let (message_tx, message_rx) = mpsc::channel();

        {
            let mut ctx = AppContext {
                state: &mut state,
                storage: &mut storage,
            };
            top_bar.init(&mut ctx)?;
            account_view.init(&mut ctx)?;
            bottom_bar.init(&mut ctx)?;
            access_node_modal.init(&mut ctx)?;
        }

        let mut app = Self {
            running: false,
            state,
            storage,
            client,
            timeout: config.timeout,
            top_bar,
            account_view,
            bottom_bar,
            access_node_modal,
            runtime,
            runtime_handle,
            message_rx,
            message_tx,
        };

        if let Some(address) = config.initial_address {
            app.open_address(address)?;
            app.state.navigation.focused_pane = FocusedPane::AccountView;
        }
        Ok(app)
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        self.running = true;
        while self.running {
            self.tick()?;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let view = AppView { state: &self.state };

        self.top_bar.render(frame, layout[0], &view);
        self.account_view.render(frame, layout[1], &view);
        self.bottom_bar.render(frame, layout[2], &view);
        if self.state.navigation.focused_pane == FocusedPane::Modal {
            self.access_node_modal.render(frame, area, &view);
        }
    }

    fn handle_events(&mut self) -> AppResult<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
            _ => {}
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        if self.state.navigation.focused_pane == FocusedPane::Modal {
            if let Some(command) = AccessNodeModal::command_from_key(key) {
                self.access_node_modal_command(command)?;
            }
            return Ok(());
        }

        if self.top_bar.is_search_active() {
            match key.code {
                KeyCode::Esc => {
                    self.top_bar_command(TopCommand::Cancel)?;
                    return Ok(());
                }
                KeyCode::Enter => {
                    self.top_bar_command(TopCommand::Submit)?;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    self.top_bar_command(TopCommand::Backspace)?;
                    return Ok(());
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.top_bar_command(TopCommand::InputChar(c))?;
                    return Ok(());
                }
                _ => {}
            }
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                self.dispatch(Action::Quit)?
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.dispatch(Action::FocusPane(FocusedPane::Top))?;
                self.top_bar_command(TopCommand::ActivateSearch)?;
            }
            (KeyModifiers::NONE, KeyCode::Tab) => self.dispatch(Action::FocusNextPane)?,
            (KeyModifiers::SHIFT, KeyCode::BackTab | KeyCode::Tab) => {
                self.dispatch(Action::FocusPreviousPane)?
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => self.dispatch(Action::Reload)?,
            (KeyModifiers::NONE, KeyCode::Char('c')) => {
                self.dispatch(Action::OpenAccessNodeModal)?
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.account_view_command(AccountViewCommand::ScrollDown)?
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.account_view_command(AccountViewCommand::ScrollUp)?
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.account_view_command(AccountViewCommand::ScrollTop)?
            }
            (KeyModifiers::NONE, KeyCode::Char(d)) if d.is_ascii_digit() => {
                if let Some(pane) = d
                    .to_digit(10)
                    .and_then(|n| FocusedPane::from_number(n as usize))
                {
                    self.dispatch(Action::FocusPane(pane))?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::Quit => self.running = false,
            Action::FocusPane(pane) => self.state.navigation.focused_pane = pane,
            Action::FocusNextPane => self.state.navigation.focus_next(),
            Action::FocusPreviousPane => self.state.navigation.focus_previous(),
            Action::OpenAddress(input) => {
                self.open_address(input)?;
                self.state.navigation.focused_pane = FocusedPane::AccountView;
            }
            Action::Reload => {
                if let Some(input) = self.state.account.requested().map(str::to_string) {
                    self.open_address(input)?;
                }
            }
            Action::OpenAccessNodeModal => {
                let mut ctx = AppContext {
                    state: &mut self.state,
                    storage: &mut self.storage,
                };
                self.access_node_modal.init(&mut ctx)?;
                self.state.navigation.focused_pane = FocusedPane::Modal;
            }
            Action::CloseModal => {
                self.state.navigation.focused_pane = FocusedPane::AccountView;
            }
            Action::AccessNodeSaved(url) => {
                self.state.navigation.focused_pane = FocusedPane::AccountView;
                match AccessClient::new(&url, self.timeout) {
                    Ok(client) => {
                        tracing::info!(access_node = %client.base_url(), "switched access node");
                        self.client = client;
                        self.state.access_node = url;
                        self.top_bar_command(TopCommand::ShowStatus(format!(
                            "Using access node {}",
                            self.state.access_node
                        )))?;
                        self.dispatch(Action::Reload)?;
                    }
                    Err(err) => {
                        tracing::warn!(%err, %url, "failed to build access node client");
                        self.top_bar_command(TopCommand::ShowStatus(format!(
                            "Could not use {url}: {err}"
                        )))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Moves the account view to `input`. Any fetch still running for a
    /// previous address is superseded and its result will be dropped.
    fn open_address(&mut self, input: String) -> AppResult<()> {
        let input = input.trim().to_string();
        self.account_view_command(AccountViewCommand::ResetScroll)?;

        match self.state.account.open(&input) {
            Opened::Fetch { request, address } => {
                tracing::info!(%address, ?request, "fetching account");
                let client = self.client.clone();
                let status = format!("Fetching info for {address}…");
                self.command_bus().spawn_async(move || async move {
                    let result = client
                        .fetch_account(&address)
                        .await
                        .map_err(|err| err.to_string());
                    Message::AccountFetched {
                        request,
                        address,
                        result,
                    }
                });
                self.top_bar_command(TopCommand::ShowStatus(status))?;
                // The fetch is already in flight; a failed write only loses the
                // startup default.
                if let Err(err) = self.storage.settings().set(SettingKey::LastAddress, &input) {
                    tracing::warn!(%err, %input, "failed to remember last address");
                }
            }
            Opened::Rejected(err) => {
                tracing::warn!(%input, %err, "rejected malformed address");
                self.top_bar_command(TopCommand::ShowStatus(format!("Invalid address: {err}")))?;
            }
        }
        Ok(())
    }

    fn account_view_command(&mut self, command: AccountViewCommand) -> AppResult<()> {
        let mut ctx = AppContext {
            state: &mut self.state,
            storage: &mut self.storage,
        };
        if let Some(action) = self.account_view.update(&command, &mut ctx)? {
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn top_bar_command(&mut self, command: TopCommand) -> AppResult<()> {
        let mut ctx = AppContext {
            state: &mut self.state,
            storage: &mut self.storage,
        };
        if let Some(action) = self.top_bar.update(&command, &mut ctx)? {
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn access_node_modal_command(&mut self, command: AccessNodeModalCommand) -> AppResult<()> {
        let mut ctx = AppContext {
            state: &mut self.state,
            storage: &mut self.storage,
        };
        if let Some(action) = self.access_node_modal.update(&command, &mut ctx)? {
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn command_bus(&self) -> CommandBus {
        CommandBus::new(self.message_tx.clone(), self.runtime_handle.clone())
    }

    fn tick(&mut self) -> AppResult<()> {
        {
            let (state, storage) = (&mut self.state, &mut self.storage);
            let mut ctx = AppContext {
                state,
                storage,
            };
            if let Some(action) = self.top_bar.tick(&mut ctx)? {
                self.dispatch(action)?;
            }
        }
        {
            let (state, storage) = (&mut self.state, &mut self.storage);
            let mut ctx = AppContext {
                state,
                storage,
            };
            if let Some(action) = self.account_view.tick(&mut ctx)? {
                self.dispatch(action)?;
            }
        }
        self.drain_messages()
    }

    fn drain_messages(&mut self) -> AppResult<()> {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                Message::AccountFetched {
                    request,
                    address,
                    result,
                } => {
                    let status = match &result {
                        Ok(account) => {
                            tracing::info!(
                                %address,
                                keys = account.keys.len(),
                                code_bytes = account.code.len(),
                                "account fetched"
                            );
                            format!("Loaded {address}")
                        }
                        Err(error) => {
                            tracing::warn!(%address, %error, "account fetch failed");
                            format!("Could not fetch {address}")
                        }
                    };
                    if self.state.account.resolve(request, result) {
                        self.top_bar_command(TopCommand::ShowStatus(status))?;
                    } else {
                        tracing::debug!(%address, ?request, "dropping stale account response");
                    }
                }
            }
        }
        Ok(())
    }
}

/// State shared across components.
#[derive(Debug)]
pub struct AppState {
    pub navigation: NavigationState,
    pub account: AccountSession,
    pub network: Network,
    pub access_node: String,
}

#[derive(Debug, Default)]
pub struct NavigationState {
    pub focused_pane: FocusedPane,
}

impl NavigationState {
    pub fn focus_next(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Top => FocusedPane::AccountView,
            FocusedPane::AccountView => FocusedPane::BottomBar,
            FocusedPane::BottomBar => FocusedPane::Top,
            FocusedPane::Modal => FocusedPane::Modal,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Top => FocusedPane::BottomBar,
            FocusedPane::AccountView => FocusedPane::Top,
            FocusedPane::BottomBar => FocusedPane::AccountView,
            FocusedPane::Modal => FocusedPane::Modal,
        };
    }
}

/// Mutable view handed to components while they handle commands.
pub struct AppContext<'a> {
    pub state: &'a mut AppState,
    pub storage: &'a mut Storage,
}

/// Read-only view handed to components while rendering.
pub struct AppView<'a> {
    pub state: &'a AppState,
}

#[derive(Clone)]
pub struct CommandBus {
    sender: mpsc::Sender<Message>,
    handle: Handle,
}

impl CommandBus {
    pub fn new(sender: mpsc::Sender<Message>, handle: Handle) -> Self {
        Self { sender, handle }
    }

    pub fn spawn_async<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Message> + Send + 'static,
    {
        let sender = self.sender.clone();
        self.handle.spawn(async move {
            let message = task().await;
            let _ = sender.send(message);
        });
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AccountFetched {
        request: RequestId,
        address: Address,
        result: Result<Account, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusPane(FocusedPane),
    FocusNextPane,
    FocusPreviousPane,
    OpenAddress(String),
    Reload,
    OpenAccessNodeModal,
    CloseModal,
    AccessNodeSaved(String),
}

mod navigation {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum FocusedPane {
        #[default]
        Top,
        AccountView,
        BottomBar,
        Modal,
    }

    impl FocusedPane {
        pub fn from_number(number: usize) -> Option<Self> {
            match number {
                1 => Some(Self::Top),
                2 => Some(Self::AccountView),
                3 => Some(Self::BottomBar),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{AccessNode, AccessNodeSource},
        flow::client::testing::{ACCOUNT_BODY, serve_once},
    };
    use tempfile::{TempDir, tempdir};

    fn test_app(initial_address: Option<&str>) -> (App, TempDir) {
        test_app_at("http://127.0.0.1:9", initial_address)
    }

    fn test_app_at(access_node: &str, initial_address: Option<&str>) -> (App, TempDir) {
        let temp = tempdir().unwrap();
        let storage = Storage::open(temp.path()).unwrap();
        let config = Config {
            network: Network::Emulator,
            access_node: AccessNode {
                url: access_node.into(),
                source: AccessNodeSource::Flag,
            },
            timeout: Duration::from_millis(200),
            initial_address: initial_address.map(str::to_string),
        };
        (App::new(config, storage).unwrap(), temp)
    }

    fn account(hex: &str) -> Account {
        Account {
            address: Address::parse(hex).unwrap(),
            balance: Some(100_000_000),
            code: b"pub contract C {}".to_vec(),
            contracts: vec!["C".into()],
            keys: Vec::new(),
        }
    }

    fn open(app: &mut App, input: &str) -> (RequestId, Address) {
        match app.state.account.open(input) {
            Opened::Fetch { request, address } => (request, address),
            Opened::Rejected(err) => panic!("unexpected rejection: {err}"),
        }
    }

    // Waits for the spawned fetch, then feeds its message through the loop.
    fn settle(app: &mut App) {
        let message = app
            .message_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch was never spawned");
        app.message_tx.send(message).unwrap();
        app.drain_messages().unwrap();
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn stale_response_never_overwrites_newer_address() {
        let (mut app, _temp) = test_app(None);
        let (first, first_address) = open(&mut app, "0x01");
        let (second, second_address) = open(&mut app, "0x02");

        app.message_tx
            .send(Message::AccountFetched {
                request: second,
                address: second_address.clone(),
                result: Ok(account("02")),
            })
            .unwrap();
        app.message_tx
            .send(Message::AccountFetched {
                request: first,
                address: first_address,
                result: Ok(account("01")),
            })
            .unwrap();
        app.drain_messages().unwrap();

        assert_eq!(app.state.account.state(), &ViewState::Loaded(account("02")));
    }

    #[test]
    fn stale_failure_does_not_flip_newer_state_to_error() {
        let (mut app, _temp) = test_app(None);
        let (first, first_address) = open(&mut app, "0x01");
        let (second, second_address) = open(&mut app, "0x02");

        app.message_tx
            .send(Message::AccountFetched {
                request: first,
                address: first_address,
                result: Err("timed out".into()),
            })
            .unwrap();
        app.drain_messages().unwrap();
        assert_eq!(app.state.account.state(), &ViewState::Pending);

        app.message_tx
            .send(Message::AccountFetched {
                request: second,
                address: second_address,
                result: Ok(account("02")),
            })
            .unwrap();
        app.drain_messages().unwrap();
        assert_eq!(app.state.account.state(), &ViewState::Loaded(account("02")));
    }

    #[test]
    fn failed_fetch_shows_error_with_requested_address() {
        let (mut app, _temp) = test_app(None);
        let (request, address) = open(&mut app, "f8d6e0586b0a20c7");
        app.message_tx
            .send(Message::AccountFetched {
                request,
                address,
                result: Err("account not found".into()),
            })
            .unwrap();
        app.drain_messages().unwrap();

        assert_eq!(app.state.account.state(), &ViewState::Error);
        assert_eq!(
            app.state.account.display_address().as_deref(),
            Some("0xf8d6e0586b0a20c7")
        );
    }

    #[test]
    fn initial_address_starts_pending_and_is_remembered() {
        let (app, _temp) = test_app(Some("0xf8d6e0586b0a20c7"));
        assert_eq!(app.state.account.state(), &ViewState::Pending);
        assert_eq!(app.state.navigation.focused_pane, FocusedPane::AccountView);
        assert_eq!(
            app.storage
                .settings()
                .get(SettingKey::LastAddress)
                .unwrap()
                .as_deref(),
            Some("0xf8d6e0586b0a20c7")
        );
    }

    #[test]
    fn malformed_address_errors_without_fetching() {
        let (mut app, _temp) = test_app(None);
        app.dispatch(Action::OpenAddress("0xnothex".into())).unwrap();
        assert_eq!(app.state.account.state(), &ViewState::Error);
        assert!(!app.state.account.is_pending());
        assert!(
            app.storage
                .settings()
                .get(SettingKey::LastAddress)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn failed_last_address_write_still_fetches() {
        let (mut app, _temp) = test_app(None);
        app.storage.delete_settings().unwrap();

        app.dispatch(Action::OpenAddress("0x01".into())).unwrap();
        assert!(app.state.account.is_pending());

        settle(&mut app);
        assert_eq!(app.state.account.state(), &ViewState::Error);
        assert_eq!(app.state.account.display_address().as_deref(), Some("0x01"));
    }

    #[test]
    fn served_account_loads_through_the_message_loop() {
        let (url, server) = serve_once("200 OK", ACCOUNT_BODY);
        let (mut app, _temp) = test_app_at(&url, None);

        app.dispatch(Action::OpenAddress("f8d6e0586b0a20c7".into()))
            .unwrap();
        settle(&mut app);

        assert_eq!(
            server.join().unwrap(),
            "GET /v1/accounts/f8d6e0586b0a20c7?expand=contracts%2Ckeys HTTP/1.1"
        );
        match app.state.account.state() {
            ViewState::Loaded(account) => {
                assert_eq!(account.balance, Some(250_000_000));
                assert_eq!(account.keys.len(), 1);
            }
            other => panic!("expected a loaded account, got {other:?}"),
        }
    }

    #[test]
    fn missing_account_ends_in_error() {
        let (url, server) = serve_once("404 Not Found", "{}");
        let (mut app, _temp) = test_app_at(&url, None);

        app.dispatch(Action::OpenAddress("0x01".into())).unwrap();
        settle(&mut app);
        server.join().unwrap();

        assert_eq!(app.state.account.state(), &ViewState::Error);
        assert_eq!(app.state.account.display_address().as_deref(), Some("0x01"));
    }

    #[test]
    fn ctrl_c_quits_from_the_access_node_modal() {
        let (mut app, _temp) = test_app(None);
        app.running = true;
        app.dispatch(Action::OpenAccessNodeModal).unwrap();
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(!app.running);
    }

    #[test]
    fn search_keys_open_the_typed_address() {
        let (mut app, _temp) = test_app(None);
        press(&mut app, KeyCode::Char('/'));
        for c in "0x0a".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.account.requested(), Some("0x0a"));
        assert_eq!(app.state.account.state(), &ViewState::Pending);
        assert_eq!(app.state.navigation.focused_pane, FocusedPane::AccountView);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let (mut app, _temp) = test_app(None);
        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn saving_access_node_swaps_client_and_reloads() {
        let (mut app, _temp) = test_app(Some("0x01"));
        let (request, address) = open(&mut app, "0x01");
        app.dispatch(Action::AccessNodeSaved("http://127.0.0.1:10/".into()))
            .unwrap();

        assert_eq!(app.client.base_url(), "http://127.0.0.1:10");
        assert_eq!(app.state.access_node, "http://127.0.0.1:10/");
        // Reload superseded the request opened before the switch.
        app.message_tx
            .send(Message::AccountFetched {
                request,
                address,
                result: Ok(account("01")),
            })
            .unwrap();
        app.drain_messages().unwrap();
        assert!(!matches!(app.state.account.state(), ViewState::Loaded(_)));
    }

    #[test]
    fn empty_access_node_resets_to_network_default() {
        let (mut app, _temp) = test_app(None);
        app.storage
            .settings()
            .set(SettingKey::AccessNodeUrl, "http://custom:8888")
            .unwrap();
        app.dispatch(Action::OpenAccessNodeModal).unwrap();
        assert_eq!(app.state.navigation.focused_pane, FocusedPane::Modal);

        app.access_node_modal_command(AccessNodeModalCommand::ClearField)
            .unwrap();
        app.access_node_modal_command(AccessNodeModalCommand::Submit)
            .unwrap();

        assert_eq!(app.state.access_node, Network::Emulator.default_access_node());
        assert_eq!(app.state.navigation.focused_pane, FocusedPane::AccountView);
        assert!(
            app.storage
                .settings()
                .get(SettingKey::AccessNodeUrl)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn invalid_access_node_keeps_modal_open() {
        let (mut app, _temp) = test_app(None);
        app.dispatch(Action::OpenAccessNodeModal).unwrap();
        app.access_node_modal_command(AccessNodeModalCommand::ClearField)
            .unwrap();
        for c in "ftp://node".chars() {
            app.access_node_modal_command(AccessNodeModalCommand::InputChar(c))
                .unwrap();
        }
        app.access_node_modal_command(AccessNodeModalCommand::Submit)
            .unwrap();

        assert_eq!(app.state.navigation.focused_pane, FocusedPane::Modal);
        assert_eq!(app.state.access_node, "http://127.0.0.1:9");
    }

    #[test]
    fn focus_cycles_between_panes() {
        let mut nav = NavigationState::default();
        nav.focus_next();
        assert_eq!(nav.focused_pane, FocusedPane::AccountView);
        nav.focus_next();
        nav.focus_next();
        assert_eq!(nav.focused_pane, FocusedPane::Top);
        nav.focus_previous();
        assert_eq!(nav.focused_pane, FocusedPane::BottomBar);
    }
}
