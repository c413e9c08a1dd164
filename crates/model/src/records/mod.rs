// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Record types stored in the repository.
//!
//! Each record lists its members, defines its schema and computes a
//! content checksum over the same members in the same order.

mod community;
mod friend;
mod meetup;
mod speaker;
mod talk;
mod venue;

pub use community::Community;
pub use friend::Friend;
pub use meetup::{Meetup, Session};
pub use speaker::Speaker;
pub use talk::Talk;
pub use venue::Venue;
