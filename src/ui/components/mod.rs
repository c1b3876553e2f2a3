// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple views.
//!
//! - [`modal`] - Centers a dialog over dimmed content and reports clicks
//!   outside of it

pub mod modal;
