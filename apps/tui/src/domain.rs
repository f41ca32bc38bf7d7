use serde::Serialize;

/// First year offered by the year slider.
pub const YEAR_MIN: i32 = 2005;
/// Last year offered by the year slider.
pub const YEAR_MAX: i32 = 2020;
/// Year the dashboard opens on.
pub const INITIAL_YEAR: i32 = 2013;

/// Tracked attributes of the happiness report, in step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    LifeLadder,
    SocialSupport,
    Gdp,
    HealthyLife,
    Freedom,
    Perceptions,
    PositiveAffect,
    NegativeAffect,
    Generosity,
}

impl Metric {
    pub const COUNT: usize = 9;

    pub const ALL: [Self; Self::COUNT] = [
        Self::LifeLadder,
        Self::SocialSupport,
        Self::Gdp,
        Self::HealthyLife,
        Self::Freedom,
        Self::Perceptions,
        Self::PositiveAffect,
        Self::NegativeAffect,
        Self::Generosity,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::LifeLadder => 0,
            Self::SocialSupport => 1,
            Self::Gdp => 2,
            Self::HealthyLife => 3,
            Self::Freedom => 4,
            Self::Perceptions => 5,
            Self::PositiveAffect => 6,
            Self::NegativeAffect => 7,
            Self::Generosity => 8,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::LifeLadder),
            1 => Some(Self::SocialSupport),
            2 => Some(Self::Gdp),
            3 => Some(Self::HealthyLife),
            4 => Some(Self::Freedom),
            5 => Some(Self::Perceptions),
            6 => Some(Self::PositiveAffect),
            7 => Some(Self::NegativeAffect),
            8 => Some(Self::Generosity),
            _ => None,
        }
    }

    /// Header of this metric's column in the report CSV.
    pub const fn column(self) -> &'static str {
        match self {
            Self::LifeLadder => "Life Ladder",
            Self::SocialSupport => "Social support",
            Self::Gdp => "Log GDP per capita",
            Self::HealthyLife => "Healthy life expectancy at birth",
            Self::Freedom => "Freedom to make life choices",
            Self::Perceptions => "Perceptions of corruption",
            Self::PositiveAffect => "Positive affect",
            Self::NegativeAffect => "Negative affect",
            Self::Generosity => "Generosity",
        }
    }

    /// Legend title shown while this metric's step is active.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LifeLadder => "Life Ladder",
            Self::SocialSupport => "Social Support",
            Self::Gdp => "Log GDP per capita",
            Self::HealthyLife => "Healthy life expectancy at birth",
            Self::Freedom => "Freedom to make life choices",
            Self::Perceptions => "Perceptions of corruption",
            Self::PositiveAffect => "Positive affect",
            Self::NegativeAffect => "Negative affect",
            Self::Generosity => "Generosity",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LifeLadder => "life-ladder",
            Self::SocialSupport => "social-support",
            Self::Gdp => "gdp",
            Self::HealthyLife => "healthy-life",
            Self::Freedom => "freedom",
            Self::Perceptions => "perceptions",
            Self::PositiveAffect => "positive-affect",
            Self::NegativeAffect => "negative-affect",
            Self::Generosity => "generosity",
        }
    }

    /// Accepts the key, the CSV column or the legend title, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|metric| {
            metric.as_str().eq_ignore_ascii_case(value)
                || metric.column().eq_ignore_ascii_case(value)
                || metric.label().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
