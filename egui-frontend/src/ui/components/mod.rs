//! # UI Components Module
//!
//! Renderers and primitives for the app's pages.
//!
//! ## Module Organization:
//! - `data_loading` - pending-operation completion and data refresh
//! - `styling` - background gradient and card painters
//! - `theme` - resolved color palettes and style application
//! - `ui_components` - Button/Text/Input primitives
//! - `header` - greeting, balance and tab navigation
//! - `dashboard_renderer` - summary cards, chart card, statement preview
//! - `chart_renderer` - entries/exits bar chart
//! - `transaction_table` - searchable, sortable statement with pagination
//! - `forms` - the new-transaction page
//! - `modals` - edit and delete dialogs
//! - `settings` - theme/accessibility preference controls

pub mod chart_renderer;
pub mod dashboard_renderer;
pub mod data_loading;
pub mod forms;
pub mod header;
pub mod modals;
pub mod settings;
pub mod styling;
pub mod theme;
pub mod transaction_table;
pub mod ui_components;

pub use styling::{card_frame, draw_card, draw_vertical_gradient};
pub use theme::Theme;
pub use ui_components::{
    card_title, labeled_input, text, themed_button, ButtonSize, ButtonVariant, TextVariant,
};
