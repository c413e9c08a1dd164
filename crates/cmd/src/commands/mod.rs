// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod check;
pub mod list;
pub mod show;

pub use check::{CheckReport, CollectionReport, check_command};
pub use list::list_command;
pub use show::show_command;

/// Call `$func::<Record>(args..).await` for the record type stored under
/// `$group`, or fail for an unknown group.
macro_rules! with_record_type {
    ($group:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $group {
            model::Community::GROUP => $func::<model::Community>($($arg),*).await,
            model::Friend::GROUP => $func::<model::Friend>($($arg),*).await,
            model::Meetup::GROUP => $func::<model::Meetup>($($arg),*).await,
            model::Speaker::GROUP => $func::<model::Speaker>($($arg),*).await,
            model::Talk::GROUP => $func::<model::Talk>($($arg),*).await,
            model::Venue::GROUP => $func::<model::Venue>($($arg),*).await,
            other => Err(anyhow::anyhow!("Unknown collection '{other}'")),
        }
    };
}

pub(crate) use with_record_type;
