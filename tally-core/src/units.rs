use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The units a duration can be written in.
///
/// Parsing accepts the short and the long suffix (`h`/`hr`, `m`/`min`); the long one is
/// what gets printed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum Unit {
    #[strum(to_string = "hr", serialize = "h")]
    Hour,
    #[strum(to_string = "min", serialize = "m")]
    Minute,
}

impl Unit {
    /// How many minutes one of this unit is worth.
    pub fn minutes(self) -> u32 {
        match self {
            Unit::Hour => 60,
            Unit::Minute => 1,
        }
    }

    /// `1 hr`, `2 hrs`, `1 min`, `5 mins`.
    pub fn label(self, count: u64) -> String {
        if count == 1 {
            format!("1 {}", self.as_ref())
        } else {
            format!("{count} {}s", self.as_ref())
        }
    }
}
