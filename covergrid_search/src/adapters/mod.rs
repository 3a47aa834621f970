// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Covergrid crates.

#[cfg(feature = "page_adapter")]
pub mod page;
