//! Utilities for converting between 24-hour clock time and the twelve
//! traditional Chinese double-hours (時辰).
//!
//! Each 時辰 is named by its earthly branch (地支) and covers two clock
//! hours; the 子 hour spans the midnight boundary, running from 23:00 to
//! 00:59 of the *next* civil day. This crate maps clock times to branches
//! and back, renders the slot ranges for display, and carries the one-day
//! date adjustment the midnight-spanning slot calls for.
//!
//! # Examples
//!
//! Clock time to branch:
//!
//! ```
//! use duhorilo::branch;
//!
//! let info = branch::time_to_branch("13:30").unwrap();
//!
//! assert_eq!("未", info.name);
//! assert_eq!("13:00-14:59", info.time_range);
//! ```
//!
//! The 23:xx rollover and its date adjustment:
//!
//! ```
//! use duhorilo::branch;
//!
//! assert_eq!(0, branch::time_to_branch("23:10").unwrap().index);
//! assert!(branch::needs_date_adjustment("23:10"));
//!
//! let date = branch::adjust_date_for_time(2024, 2, 29, "23:10").unwrap();
//! assert_eq!((2024, 3, 1), date.ymd());
//! ```
//!
//! # Planned features
//!
//! - Hour pillars (時柱): combining the branch with its heavenly stem from
//!   the day pillar
//! - Apparent-solar-time correction of the slot boundaries
//!
//! I wrote this primarily for my own use, so the design and development of
//! this crate will depend heavily on my personal need.

pub mod branch;
pub mod clock;
pub mod date;
pub mod lang;
pub mod submit;

pub use branch::{Branch, BranchInfo};
pub use clock::ClockTime;
pub use date::{CivilDate, YearType};
