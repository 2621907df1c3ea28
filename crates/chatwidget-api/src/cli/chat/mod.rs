//! Interactive terminal chat that plays the widget panel.
//!
//! Reads lines, routes slash commands, and sends everything else through
//! the reply resolver. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
