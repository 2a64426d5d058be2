use crate::flow::{Account, Address, AddressError, with_prefix};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Pending,
    Error,
    Loaded(Account),
}

/// Identifies one fetch. Completions carrying any other id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// What the caller must do after opening an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Fetch { request: RequestId, address: Address },
    Rejected(AddressError),
}

/// The account view's single state slot, keyed to the address it was opened for.
#[derive(Debug, Default)]
pub struct AccountSession {
    requested: Option<String>,
    current: Option<RequestId>,
    next_id: u64,
    state: ViewState,
}

impl AccountSession {
    /// Resets to `Pending` for `input` and supersedes any outstanding request.
    /// Malformed input goes straight to `Error`.
    pub fn open(&mut self, input: &str) -> Opened {
        self.next_id += 1;
        let request = RequestId(self.next_id);
        self.requested = Some(input.trim().to_string());
        self.state = ViewState::Pending;

        match Address::parse(input) {
            Ok(address) => {
                self.current = Some(request);
                Opened::Fetch { request, address }
            }
            Err(err) => {
                self.current = None;
                self.state = ViewState::Error;
                Opened::Rejected(err)
            }
        }
    }

    /// Applies a fetch outcome. Returns `false` and leaves state untouched when
    /// `request` is not the outstanding one.
    pub fn resolve<E>(&mut self, request: RequestId, outcome: Result<Account, E>) -> bool {
        if self.current != Some(request) {
            return false;
        }
        self.current = None;
        self.state = match outcome {
            Ok(account) => ViewState::Loaded(account),
            Err(_) => ViewState::Error,
        };
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Raw address as entered.
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Entered address in `0x` form, for headings before an account is loaded.
    pub fn display_address(&self) -> Option<String> {
        self.requested.as_deref().map(with_prefix)
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}
