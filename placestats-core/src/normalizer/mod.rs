//! Map raw joined favourite rows into [`FavoriteInteractionRecord`] values.
//!
//! Normalization never fails. Absent identifiers become `0`, absent text
//! becomes an empty string, and an unusable age is replaced by a
//! deterministic pseudo-age so every normalized record carries a positive
//! age.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::FavoriteInteractionRecord;

/// Pseudo-ages indexed by `user_id mod 20`.
///
/// Used when no birth date is available. The table is fixed so existing
/// fixtures keep resolving to the same ages.
pub const PSEUDO_AGES: [i32; 20] = [
    22, 28, 19, 34, 25, 31, 42, 23, 38, 27, 20, 45, 29, 33, 21, 36, 24, 41, 26, 30,
];

const FALLBACK_CATEGORY: &str = "Autre";

/// One joined favourite/user/place row as delivered by the data-access layer.
///
/// Every field is optional so partially populated rows still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFavoriteRow {
    /// Identifier of the user.
    pub user_id: Option<i64>,
    /// Identifier of the place.
    pub lieu_id: Option<i64>,
    /// Display name of the place.
    pub lieu_nom: Option<String>,
    /// Raw category code, e.g. `CAFE` or `lieu_public`.
    pub categorie: Option<String>,
    /// City of the place.
    pub ville: Option<String>,
    /// Lower price bound.
    pub budget_min: Option<f64>,
    /// Upper price bound.
    pub budget_max: Option<f64>,
    /// Birth date as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
    pub date_naissance: Option<String>,
    /// Role of the user account.
    pub role: Option<String>,
    /// Timestamp of the favourite.
    pub date_ajout: Option<String>,
}

/// Turns [`RawFavoriteRow`] values into normalized records.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use placestats_core::{RawFavoriteRow, RecordNormalizer};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let normalizer = RecordNormalizer::new(today, true);
/// let row = RawFavoriteRow {
///     user_id: Some(3),
///     categorie: Some("lieu_public".into()),
///     date_naissance: Some("1990-06-02".into()),
///     ..RawFavoriteRow::default()
/// };
///
/// let record = normalizer.normalize(&row);
/// assert_eq!(record.age, 33);
/// assert_eq!(record.categorie, "Lieu public");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordNormalizer {
    today: NaiveDate,
    has_age_data: bool,
}

impl RecordNormalizer {
    /// Build a normalizer.
    ///
    /// `today` is the reference date for age computation. `has_age_data`
    /// reports whether the data source exposes birth dates at all; when it is
    /// `false` every record receives a pseudo-age.
    #[must_use]
    pub const fn new(today: NaiveDate, has_age_data: bool) -> Self {
        Self {
            today,
            has_age_data,
        }
    }

    /// Normalize a single row.
    #[must_use]
    pub fn normalize(&self, row: &RawFavoriteRow) -> FavoriteInteractionRecord {
        let user_id = row.user_id.unwrap_or_default();
        FavoriteInteractionRecord {
            user_id,
            lieu_id: row.lieu_id.unwrap_or_default(),
            lieu_nom: row.lieu_nom.clone().unwrap_or_default(),
            categorie: normalize_category(row.categorie.as_deref()),
            ville: row.ville.clone().unwrap_or_default(),
            budget_min: row.budget_min,
            budget_max: row.budget_max,
            age: self.resolve_age(user_id, row.date_naissance.as_deref()),
            role: row.role.clone().unwrap_or_default(),
            date_ajout: row.date_ajout.clone().unwrap_or_default(),
        }
    }

    /// Normalize every row, preserving order.
    #[must_use]
    pub fn normalize_all(&self, rows: &[RawFavoriteRow]) -> Vec<FavoriteInteractionRecord> {
        rows.iter().map(|row| self.normalize(row)).collect()
    }

    /// Resolve the age of a user.
    ///
    /// Uses whole years between the birth date and the reference date when
    /// birth dates are available and parse. Falls back to [`pseudo_age`] when
    /// they are not, or when the computed age is not positive.
    #[must_use]
    pub fn resolve_age(&self, user_id: i64, date_naissance: Option<&str>) -> i32 {
        let computed = if self.has_age_data {
            date_naissance
                .and_then(parse_birth_date)
                .map(|birth| whole_years_between(birth, self.today))
        } else {
            None
        };
        match computed {
            Some(age) if age > 0 => age,
            _ => pseudo_age(user_id),
        }
    }
}

/// Deterministic stand-in age for a user without a usable birth date.
///
/// Indexes [`PSEUDO_AGES`] with the Euclidean remainder of `user_id` by 20,
/// so negative identifiers map into the table as well.
///
/// # Examples
/// ```
/// use placestats_core::pseudo_age;
///
/// assert_eq!(pseudo_age(0), 22);
/// assert_eq!(pseudo_age(21), 28);
/// assert_eq!(pseudo_age(-1), 30);
/// ```
#[must_use]
pub fn pseudo_age(user_id: i64) -> i32 {
    let index = usize::try_from(user_id.rem_euclid(20)).unwrap_or_default();
    // rem_euclid keeps the index within the table.
    PSEUDO_AGES.get(index).copied().unwrap_or_default()
}

/// Map a raw category code to its display form.
///
/// Known codes are matched case-insensitively; blank or absent input becomes
/// `"Autre"`; anything else is lower-cased with its first letter capitalized.
///
/// # Examples
/// ```
/// use placestats_core::normalize_category;
///
/// assert_eq!(normalize_category(Some("cafe")), "Café");
/// assert_eq!(normalize_category(Some("CENTRE_COMMERCIAL")), "Centre commercial");
/// assert_eq!(normalize_category(Some("  ")), "Autre");
/// assert_eq!(normalize_category(Some("PLAGE")), "Plage");
/// ```
#[must_use]
pub fn normalize_category(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return FALLBACK_CATEGORY.to_owned();
    }
    let known = match trimmed.to_uppercase().as_str() {
        "CAFE" => Some("Café"),
        "RESTO" => Some("Resto"),
        "MUSEE" => Some("Musée"),
        "LIEU_PUBLIC" | "LIEUPUBLIC" => Some("Lieu public"),
        "CENTRECOMMERCIAL" | "CENTRE_COMMERCIAL" => Some("Centre commercial"),
        _ => None,
    };
    known.map_or_else(|| capitalize(&trimmed.to_lowercase()), str::to_owned)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|stamp| stamp.date())
        })
}

fn whole_years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    today
        .years_since(birth)
        .and_then(|years| i32::try_from(years).ok())
        .unwrap_or_default()
}
