pub mod category_grid;
pub mod tool_list;

pub use category_grid::CategoryGrid;
pub use tool_list::ToolList;
