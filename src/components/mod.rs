//! UI Components
//!
//! Leptos components making up the reminders widget.

mod title_bar;
mod filter_bar;
mod new_task_form;
mod task_list;
mod task_row;
mod summary_footer;

pub use title_bar::TitleBar;
pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use summary_footer::SummaryFooter;
