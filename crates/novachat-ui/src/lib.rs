pub mod pages;
pub mod panels;
pub mod state;
pub mod theme;
