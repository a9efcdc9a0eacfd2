// ABOUTME: Re-exports helper modules for macrofit-cli
// ABOUTME: File input and output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
