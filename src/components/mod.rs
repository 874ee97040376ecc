//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod clear_all_button;
mod entry_form;
mod entry_table;
mod journal_page;
mod page_tabs;
mod plot_page;
mod point_list;
mod point_panel;

pub use alert_banner::AlertBanner;
pub use clear_all_button::ClearAllButton;
pub use entry_form::EntryForm;
pub use entry_table::EntryTable;
pub use journal_page::JournalPage;
pub use page_tabs::PageTabs;
pub use plot_page::PlotPage;
pub use point_list::PointList;
pub use point_panel::PointPanel;
