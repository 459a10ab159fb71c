//! Configuration management for Megatron.
//!
//! User preferences ([`settings::Config`]), key bindings
//! ([`keymap::Keymap`]) and colours ([`theme::Theme`]) all come from one TOML
//! file loaded at startup.

pub mod keymap;
pub mod settings;
pub mod theme;
