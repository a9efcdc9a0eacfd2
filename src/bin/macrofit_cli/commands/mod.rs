// ABOUTME: Re-exports command modules for macrofit-cli
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
pub mod project;
pub mod shopping;
pub mod targets;
