//! # App State Module
//!
//! Central application state and initialization. `FinanceApp` owns the mock
//! backend, the persisted preferences with their resolved `Theme`, and one
//! state struct per view concern, following a single-source-of-truth layout.

use log::info;
use std::time::Instant;

use crate::backend::{Backend, UpdateTransactionRequest, SIMULATED_LATENCY};
use crate::preferences::{AccessibilityConfig, FontSize, PreferenceStore, ThemeConfig};
use crate::ui::components::theme::Theme;
use crate::ui::state::{
    ChartState, CoreAppState, DeleteConfirmState, EditFormState, TableState,
    TransactionFormState, UiState,
};
use shared::CreateTransactionRequest;

/// Pages available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Transactions,
    NewTransaction,
    Settings,
}

impl MainTab {
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Painel",
            MainTab::Transactions => "Transações",
            MainTab::NewTransaction => "Nova Transação",
            MainTab::Settings => "Configurações",
        }
    }

    pub const ALL: [MainTab; 4] = [
        MainTab::Dashboard,
        MainTab::Transactions,
        MainTab::NewTransaction,
        MainTab::Settings,
    ];
}

/// A backend call held back by the simulated network delay
#[derive(Debug)]
pub struct PendingOperation {
    pub kind: PendingKind,
    pub ready_at: Instant,
}

#[derive(Debug)]
pub enum PendingKind {
    /// Initial and full reloads of everything the pages show
    LoadAll,
    Submit(CreateTransactionRequest),
    Update {
        id: String,
        update: UpdateTransactionRequest,
    },
    Delete(String),
}

/// Main application struct for the egui finance dashboard
pub struct FinanceApp {
    pub backend: Backend,

    // Preference store and the derived theme
    pub preference_store: PreferenceStore,
    pub theme_config: ThemeConfig,
    pub accessibility: AccessibilityConfig,
    pub theme: Theme,
    /// Dark-mode hint from the windowing system, for the Auto mode
    pub system_dark: bool,
    preferences_dirty: bool,

    // Per-concern state
    pub core: CoreAppState,
    pub ui: UiState,
    pub table: TableState,
    pub chart: ChartState,
    pub form: TransactionFormState,

    // Modal states
    pub delete_confirm: Option<DeleteConfirmState>,
    pub edit_form: Option<EditFormState>,

    pub current_tab: MainTab,

    /// Operations waiting out the simulated latency
    pub pending: Vec<PendingOperation>,
}

impl FinanceApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing FinanceApp");

        let system_dark = cc.egui_ctx.style().visuals.dark_mode;

        let preference_store = PreferenceStore::new();
        let (theme_config, accessibility) = preference_store.load();
        let theme = Theme::resolve(&theme_config, &accessibility, system_dark);

        let backend = Backend::new()?;

        let mut app = Self {
            backend,
            preference_store,
            theme_config,
            accessibility,
            theme,
            system_dark,
            preferences_dirty: false,
            core: CoreAppState::new(),
            ui: UiState::new(),
            table: TableState::new(),
            chart: ChartState::new(),
            form: TransactionFormState::new(),
            delete_confirm: None,
            edit_form: None,
            current_tab: MainTab::Dashboard,
            pending: Vec::new(),
        };

        // First load goes through the simulated delay like everything else
        app.schedule(PendingKind::LoadAll);
        Ok(app)
    }

    /// Queue a backend call behind the simulated latency
    pub fn schedule(&mut self, kind: PendingKind) {
        self.pending.push(PendingOperation {
            kind,
            ready_at: Instant::now() + SIMULATED_LATENCY,
        });
    }

    /// Font size: the accessibility setting wins when it deviates from the
    /// default, otherwise the theme setting applies.
    pub fn effective_font_size(&self) -> FontSize {
        if self.accessibility.font_size != FontSize::Medium {
            self.accessibility.font_size
        } else {
            self.theme_config.font_size
        }
    }

    /// Either preference source can request reduced motion
    pub fn effective_reduced_motion(&self) -> bool {
        self.theme_config.reduced_motion || self.accessibility.reduced_motion
    }

    /// Re-resolve the theme and flag the preference files for saving
    pub fn preferences_changed(&mut self) {
        self.theme = Theme::resolve(&self.theme_config, &self.accessibility, self.system_dark);
        self.preferences_dirty = true;
    }

    /// Write the preference files if anything changed this frame
    pub fn persist_preferences_if_dirty(&mut self) {
        if !self.preferences_dirty {
            return;
        }
        self.preferences_dirty = false;
        if let Err(e) = self
            .preference_store
            .save(&self.theme_config, &self.accessibility)
        {
            log::warn!("Could not persist preferences: {}", e);
        }
    }
}
