//! Card kinds served by the gateway and their per-endpoint constants.

/// Which upstream card a request composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Generic stats card (`/api/stats`).
    Stats,
    /// Top languages card (`/api/top-langs`).
    TopLangs,
}

/// Default outer width for every card.
pub const DEFAULT_WIDTH: i64 = 500;
/// Default horizontal offset of the role overlay.
pub const DEFAULT_ROLE_X: i64 = 360;
/// Default vertical offset of the role overlay.
pub const DEFAULT_ROLE_Y: i64 = 0;

impl Card {
    /// Stable label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Card::Stats => "stats",
            Card::TopLangs => "top-langs",
        }
    }

    pub fn default_width(self) -> i64 {
        DEFAULT_WIDTH
    }

    pub fn default_height(self) -> i64 {
        match self {
            Card::Stats => 200,
            Card::TopLangs => 170,
        }
    }

    /// Height attribute of the background rectangle.
    ///
    /// The two cards differ here (98% vs 99%) and the difference is kept on purpose.
    pub fn rect_height(self) -> &'static str {
        match self {
            Card::Stats => "98%",
            Card::TopLangs => "99%",
        }
    }

    /// Query parameters forced onto the upstream request when the caller left them unset.
    pub fn forced_defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Card::Stats => &[],
            Card::TopLangs => &[("layout", "compact")],
        }
    }
}
