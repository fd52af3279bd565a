pub mod field_input;
pub mod footer;
pub mod suggestion_list;
