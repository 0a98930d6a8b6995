// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for CMS content fetching, caching and fallback

#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod fallback_tests;
mod store_tests;
