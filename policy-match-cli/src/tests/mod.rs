//! Shared test harness modules for the policy-match CLI.

use super::*;

mod helpers;
