// Remote endpoints of the signal API
use std::fmt;

pub const HOURS_IN_PAST: u32 = 96;
pub const HOURS_IN_FUTURE: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Now,
    StatesRelative,
    Forecast,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Now => "/v1/now",
            Endpoint::StatesRelative => "/v1/statesRelative",
            Endpoint::Forecast => "/v1/forecast",
        }
    }

    /// Query string for a postal code, without the leading `?`.
    pub fn query(self, zip: &str) -> String {
        let zip = urlencoding::encode(zip);
        match self {
            Endpoint::StatesRelative => format!(
                "zip={}&hoursInFuture={}&hoursInPast={}",
                zip, HOURS_IN_FUTURE, HOURS_IN_PAST
            ),
            Endpoint::Now | Endpoint::Forecast => format!("zip={}", zip),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
