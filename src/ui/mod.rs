// SPDX-License-Identifier: MPL-2.0
//! UI building blocks for the portal form.

pub mod copies_input;
pub mod design_tokens;
pub mod file_selector;
pub mod status;
pub mod styles;
pub mod theming;
