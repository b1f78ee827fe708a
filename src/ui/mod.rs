pub mod apod;
pub mod panels;
pub mod plot;
pub mod table;
