// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent workspace model.
//!
//! Everything in this module is plain data plus the rules that keep it
//! consistent. The `ui` layer renders these types with Iced and feeds user
//! gestures back in as method calls.
//!
//! - [`aspect`] - Aspect ratio presets and centered-fit geometry
//! - [`naming`] - Unique default labels for new canvases
//! - [`tab_strip`] - Ordered documents plus the pinned "+" entry

pub mod aspect;
pub mod naming;
pub mod tab_strip;

pub use aspect::{AspectRatio, ParseAspectRatioError, Rect, PRESETS};
pub use tab_strip::{Entry, Tab, TabEvent, TabStrip};
