//! Operating system entropy access.
//!
//! The generators in [`crate::rng`] are deterministic; only their initial
//! seed comes from the platform. This module is the single seam through
//! which that seed material is obtained, with a platform-specific
//! implementation selected at compile time. Every submodule exposes the
//! same `sys_random` surface, so callers stay fully portable.

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
