pub mod column;
pub mod detail;
pub mod header;
pub mod help;
pub mod status_bar;
pub mod toast;
