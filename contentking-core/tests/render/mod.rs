// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for section renderers and page views

#[path = "../common/mod.rs"]
mod common;

mod page_tests;
