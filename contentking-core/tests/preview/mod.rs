// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the live preview bridge

#[path = "../common/mod.rs"]
mod common;

mod bridge_tests;
mod refetch_tests;
