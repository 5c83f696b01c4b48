pub mod board;
pub mod controls;
pub mod overlay;
pub mod pages;
pub mod scoreboard;
pub mod stats_panel;
