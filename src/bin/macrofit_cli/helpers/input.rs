// ABOUTME: File input helpers for macrofit-cli
// ABOUTME: Reads profile JSON and raw meal-plan text with path context on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use macrofit_core::models::UserProfile;

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read and parse a profile JSON file
pub fn read_profile(path: &Path) -> Result<UserProfile> {
    let text = read_text(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid profile JSON in {}", path.display()))
}
