//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate. They are
//! triggered with `Commands::trigger` and handled by observers, see
//! [`crate::systems::palette`].
//!
//! Submodules:
//! - [`contact`] – sensor enter/exit notifications
//! - [`controller`] – discrete controller input transitions
//! - [`timer`] – scheduled task continuations
pub mod contact;
pub mod controller;
pub mod timer;
