//! Distance-based fares.

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Fare charged per kilometre, in hundredths of a currency unit (1.25).
pub const PRICE_PER_KM_HUNDREDTHS: u64 = 125;

/// An amount of money, held exactly in hundredths of a currency unit.
///
/// Serialises as a plain JSON number in whole units, e.g. `437.5`.
///
/// # Examples
///
/// ```
/// use journey_finder::domain::Fare;
///
/// let fare = Fare::for_distance(350);
/// assert_eq!(fare.as_f64(), 437.5);
/// assert_eq!(fare.to_string(), "437.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fare(u64);

impl Fare {
    /// The zero amount.
    pub const ZERO: Fare = Fare(0);

    /// Create a fare from hundredths of a currency unit.
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Price a leg of the given length at the linear per-kilometre rate.
    pub fn for_distance(distance_km: u64) -> Self {
        Self(distance_km.saturating_mul(PRICE_PER_KM_HUNDREDTHS))
    }

    /// Returns the amount in hundredths of a currency unit.
    pub fn hundredths(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole currency units.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
