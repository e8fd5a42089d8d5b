mod filter_bar;
mod summary_footer;
mod task_header;
mod task_input;
mod task_list;
mod task_list_row;

pub use filter_bar::FilterBar;
pub use summary_footer::SummaryFooter;
pub use task_header::TaskHeader;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
