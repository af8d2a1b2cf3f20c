pub mod output;
pub mod theme;
