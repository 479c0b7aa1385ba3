//! `lemni-world` — the world state shared by every car.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`slot`]     | `CarRecord`, `Slot` (lock-free single-writer cell)         |
//! | [`world`]    | `WorldState`, `SlotWriter`                                 |
//! | [`params`]   | `CarParams` (per-car acceleration and speed cap)           |
//! | [`builder`]  | `WorldBuilder` (fluent construction)                       |
//!
//! # Ownership model
//!
//! The world is one fixed-size array of slots.  Car `i` is the only writer of
//! slot `i`; everybody may read every slot.  Exclusive write access is a
//! value, [`SlotWriter`], obtained once per slot through
//! [`WorldState::claim`].  Readers never block the writer and never observe a
//! record half-way through an update, but they may observe a record that is
//! one tick old.

pub mod builder;
pub mod params;
pub mod slot;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::WorldBuilder;
pub use params::CarParams;
pub use slot::{CarRecord, Slot};
pub use world::{SlotWriter, WorldState};
