use crate::catalog::StepAction;
use crate::config::ConfigStore;
use crate::mvi::Reducer;
use crate::session::{SessionIntent, SessionReducer, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// The session context (MVI pattern). All storefront state lives here.
    session: SessionState,
    /// View-local cursor into the catalog list. Never part of the
    /// session: moving it dispatches nothing.
    selected: usize,
    config: ConfigStore,
}

impl App {
    pub fn new(session: SessionState, config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            session,
            selected: 0,
            config,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn currency(&self) -> String {
        self.config.currency()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    /// Route a key press according to the current view state.
    ///
    /// While the error signal is set, normal interaction is blocked and
    /// only dismiss (and quit) are available; while the confirmation is
    /// shown, only new-order (and quit).
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('q') {
            self.request_quit();
            return;
        }

        if self.session.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dispatch(SessionIntent::DismissError);
            }
            return;
        }

        if self.session.confirmed {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                self.dispatch(SessionIntent::StartNewOrder);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('a') => {
                self.step_selected(StepAction::Increment);
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.step_selected(StepAction::Decrement);
            }
            KeyCode::Delete | KeyCode::Char('x') => self.remove_selected(),
            KeyCode::Char('c') => self.dispatch(SessionIntent::ConfirmOrder),
            _ => {}
        }
    }

    /// Dispatch an intent to the session reducer.
    pub fn dispatch(&mut self, intent: SessionIntent) {
        tracing::debug!(?intent, "dispatch");
        let had_error = self.session.has_error();
        dispatch_mvi!(self, session, SessionReducer, intent);
        if let Some(error) = self.session.error {
            if !had_error {
                tracing::warn!(code = error.code(), "session error raised: {error}");
            }
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.session.catalog.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_next(&mut self) {
        let len = self.session.catalog.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if self.selected + 1 >= len {
            0
        } else {
            self.selected + 1
        };
    }

    fn step_selected(&mut self, action: StepAction) {
        let Some(item) = self.session.catalog.items().get(self.selected) else {
            return;
        };
        // Decrement affordance is guarded at the view edge; the core
        // still clamps defensively.
        if action == StepAction::Decrement && item.quantity == 0 {
            return;
        }
        let id = item.entry.id.clone();
        self.dispatch(SessionIntent::AddOrUpdate {
            item: Some(id),
            action,
        });
    }

    fn remove_selected(&mut self) {
        let Some(item) = self.session.catalog.items().get(self.selected) else {
            return;
        };
        let id = item.entry.id.clone();
        self.dispatch(SessionIntent::Remove { id });
    }
}
