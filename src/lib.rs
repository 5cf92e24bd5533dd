// SPDX-License-Identifier: MPL-2.0
//! `print_portal` is a small desktop front-end for a webhook-driven print
//! service, built with the Iced GUI framework.
//!
//! It presents a single form (document, copy count, send button), submits the
//! document to a preconfigured webhook as a multipart request, and reports the
//! outcome through transient status banners.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
pub mod webhook;
