//! XDG-style path utilities for configuration and cache directories.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so
//! the same layout applies on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "langpack";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/langpack` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/langpack` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Returns the default directory for compiled translation artifacts.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/langpack` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/langpack` otherwise
pub fn cache_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", ".cache")
}

fn xdg_dir(var: &str, home_fallback: &str) -> Result<PathBuf> {
    match std::env::var(var) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(APP_DIR)),
        _ => Ok(home_dir()?.join(home_fallback).join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
