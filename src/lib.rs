//! Grid Snake: a tick-driven state machine over a walled 64×48 arena, with a
//! stateless presenter and a terminal backend.

pub mod board;
pub mod canvas;
pub mod config;
pub mod error;
pub mod food;
pub mod font;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod surface;
pub mod terminal_runtime;
pub mod theme;
pub mod tile;
pub mod ui;
