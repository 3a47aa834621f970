// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Covergrid crates.
//!
//! Enabled via feature flags to keep the core free of a concrete document.

#[cfg(feature = "page_adapter")]
pub mod page;
