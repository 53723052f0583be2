//! Age and budget buckets used to slice favourite interactions.
//!
//! Both slicings are pure functions of a single number. Records never store a
//! slice; they derive it on demand from `age` or the averaged budget.
//!
//! # Examples
//! ```
//! use placestats_core::{AgeSlice, BudgetSlice};
//!
//! assert_eq!(AgeSlice::from_age(30).as_str(), "25-34");
//! assert_eq!(BudgetSlice::from_budget(0.0).to_string(), "Gratuit");
//! ```

use std::fmt;

use serde::Serialize;

/// Age bucket of the user behind an interaction.
///
/// The derived ordering is the dashboard display order, with
/// [`AgeSlice::Unknown`] last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeSlice {
    /// Younger than 18.
    #[serde(rename = "< 18")]
    Under18,
    /// 18 to 24 inclusive.
    #[serde(rename = "18-24")]
    From18To24,
    /// 25 to 34 inclusive.
    #[serde(rename = "25-34")]
    From25To34,
    /// 35 to 49 inclusive.
    #[serde(rename = "35-49")]
    From35To49,
    /// 50 and over.
    #[serde(rename = "50+")]
    Over50,
    /// No usable age.
    #[serde(rename = "Inconnu")]
    Unknown,
}

impl AgeSlice {
    /// Every slice in display order.
    pub const ALL: [Self; 6] = [
        Self::Under18,
        Self::From18To24,
        Self::From25To34,
        Self::From35To49,
        Self::Over50,
        Self::Unknown,
    ];

    /// Slices backed by a usable age, in display order.
    pub const KNOWN: [Self; 5] = [
        Self::Under18,
        Self::From18To24,
        Self::From25To34,
        Self::From35To49,
        Self::Over50,
    ];

    /// Bucket an age in whole years.
    ///
    /// # Examples
    /// ```
    /// use placestats_core::AgeSlice;
    ///
    /// assert_eq!(AgeSlice::from_age(-3), AgeSlice::Unknown);
    /// assert_eq!(AgeSlice::from_age(18), AgeSlice::From18To24);
    /// assert_eq!(AgeSlice::from_age(50), AgeSlice::Over50);
    /// ```
    #[must_use]
    pub const fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..=0 => Self::Unknown,
            1..=17 => Self::Under18,
            18..=24 => Self::From18To24,
            25..=34 => Self::From25To34,
            35..=49 => Self::From35To49,
            _ => Self::Over50,
        }
    }

    /// Return the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under18 => "< 18",
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To49 => "35-49",
            Self::Over50 => "50+",
            Self::Unknown => "Inconnu",
        }
    }

    /// Report whether the slice stems from a usable age.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for AgeSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price bucket derived from the averaged min/max budget of a place, in TND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BudgetSlice {
    /// Exactly zero.
    #[serde(rename = "Gratuit")]
    Free,
    /// Below 20.
    #[serde(rename = "< 20 TND")]
    Under20,
    /// 20 to 80 inclusive.
    #[serde(rename = "20-80 TND")]
    From20To80,
    /// Above 80.
    #[serde(rename = "> 80 TND")]
    Over80,
}

impl BudgetSlice {
    /// Bucket an averaged budget.
    ///
    /// # Examples
    /// ```
    /// use placestats_core::BudgetSlice;
    ///
    /// assert_eq!(BudgetSlice::from_budget(19.99), BudgetSlice::Under20);
    /// assert_eq!(BudgetSlice::from_budget(80.0), BudgetSlice::From20To80);
    /// assert_eq!(BudgetSlice::from_budget(80.01), BudgetSlice::Over80);
    /// ```
    #[expect(
        clippy::float_cmp,
        reason = "a budget of exactly zero marks a free place"
    )]
    #[must_use]
    pub fn from_budget(budget: f64) -> Self {
        if budget == 0.0 {
            Self::Free
        } else if budget < 20.0 {
            Self::Under20
        } else if budget <= 80.0 {
            Self::From20To80
        } else {
            Self::Over80
        }
    }

    /// Return the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Gratuit",
            Self::Under20 => "< 20 TND",
            Self::From20To80 => "20-80 TND",
            Self::Over80 => "> 80 TND",
        }
    }
}

impl fmt::Display for BudgetSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
