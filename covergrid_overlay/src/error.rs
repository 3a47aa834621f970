// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay error types.

use thiserror::Error;

/// Failures while showing a card's tooltip.
///
/// These never leave the hit tester: the affected card is still hovered and
/// the failure is reported through `tracing`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipError {
    /// The card has no descendant flagged as its tooltip.
    #[error("card has no tooltip element")]
    MissingTooltip,
}
