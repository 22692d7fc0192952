// ABOUTME: Helper modules for barkeep-cli
// ABOUTME: Output formatting for drink lists and recipe cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

pub mod display;
