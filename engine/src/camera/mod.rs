//! Camera Module
//!
//! The first-person camera rig and the aim probe that looks through it.
//! This module is window-system agnostic; it only deals with camera state
//! and math.

pub mod aim;
pub mod rig;

pub use aim::{AimChange, AimProbe};
pub use rig::CameraRig;
