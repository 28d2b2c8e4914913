// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how segments get their numbers and their order.
//!
//! An exact phrase hit is the strongest signal, word overlap the next, and an
//! in-order character subsequence the weakest. The weights keep those three
//! bands apart.

mod core;
pub mod ranking;

pub use self::core::*;
pub(crate) use self::core::{score_prepared, PreparedQuery};
