pub mod catalog;
pub mod design;
