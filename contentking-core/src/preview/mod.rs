// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live preview module
//!
//! Support for the CMS visual editor:
//! - Detecting a preview page load from the `live_preview` URL marker
//! - Relaying editor change notifications to subscribers
//! - Edit tags addressing editable fields of fetched records
//!
//! Outside the editor the bridge stays inactive and every call is a no-op.

mod bridge;
mod session;
mod tags;

pub use bridge::{
    CallbackHandler, EntryChange, LivePreview, PreviewHandler, PreviewState, SubscriptionId,
};
pub use session::{PreviewError, PreviewSession, LIVE_PREVIEW_PARAM};
pub use tags::{EditTag, EDIT_TAG_ATTRIBUTE};
