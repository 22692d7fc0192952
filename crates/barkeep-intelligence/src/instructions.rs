// ABOUTME: Splits a recipe's instruction blob into numbered preparation steps
// ABOUTME: Sentence-level split on ". " with the terminating period restored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Split instructions into steps
///
/// Sentences are separated by `". "`; blank sentences are dropped and every
/// step except the last gets its period back. An empty result means "no
/// additional steps needed".
#[must_use]
pub fn split_steps(instructions: &str) -> Vec<String> {
    let sentences: Vec<&str> = instructions
        .split(". ")
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();

    let last = sentences.len().saturating_sub(1);
    sentences
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            if i == last {
                sentence.to_owned()
            } else {
                format!("{sentence}.")
            }
        })
        .collect()
}
