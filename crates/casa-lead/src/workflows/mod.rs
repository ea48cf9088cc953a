pub mod catalog;
pub mod financing;
pub mod leads;
