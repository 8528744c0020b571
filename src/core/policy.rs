use serde::{Deserialize, Serialize};

/// How many sessions an employee may record on one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// A date with a closed session refuses further clock-ins.
    #[default]
    OnePerDay,
    /// Any number of sequential sessions per date.
    Multiple,
}

/// What clock-out does when `now` is earlier than the clock-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewPolicy {
    /// Fail with `ClockSkew` and leave the session open.
    #[default]
    Reject,
    /// Close the session at its clock-in time with zero hours.
    Clamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockPolicy {
    pub session: SessionPolicy,
    pub skew: SkewPolicy,
}
