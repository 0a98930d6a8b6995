// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Section renderers
//!
//! Render resolved content to HTML strings. Text is escaped and otherwise
//! emitted verbatim; edit tags are attached only to content fetched from
//! the CMS.

pub mod cards;
mod hero;
mod html;
mod layout;
mod page;

pub use hero::{hero, split_title};
pub use html::{escape, SectionHeading};
pub use layout::{footer, header};
pub use page::{Page, PageView};
