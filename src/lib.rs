#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod chat;
mod common;
mod config;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
mod menu;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use chat::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use menu::*;
#[cfg(feature = "std")]
pub use ui::*;
