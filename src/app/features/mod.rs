pub mod form;
pub mod suggest;
