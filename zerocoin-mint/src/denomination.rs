//! Coin denominations: the closed set of face values the network accepts.
//!
//! Face values are fixed at 1, 10, 25, 50 and 100 and are never extended implicitly; any
//! amount or label that does not match the table exactly is an error rather than a coerced
//! sentinel. The variant names follow the zerocoin tradition of honoring cryptographers.
//!
//! On the wire a denomination travels as its face value, with zero reserved as the invalid
//! tag; see [`Denomination::to_tag`]. The enum itself never reaches the wire.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Number of base currency units per unit of face value.
pub const COIN: i64 = 100_000_000;

/// A coin's face value, drawn from the fixed public set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    /// Face value 1.
    Lovelace,
    /// Face value 10.
    Goldwasser,
    /// Face value 25.
    Rackoff,
    /// Face value 50.
    Pedersen,
    /// Face value 100.
    Williamson,
}

impl Denomination {
    /// Every accepted denomination, smallest first.
    pub const ALL: [Denomination; 5] = [
        Denomination::Lovelace,
        Denomination::Goldwasser,
        Denomination::Rackoff,
        Denomination::Pedersen,
        Denomination::Williamson,
    ];

    /// The face value of this denomination.
    pub fn face_value(self) -> u64 {
        match self {
            Denomination::Lovelace => 1,
            Denomination::Goldwasser => 10,
            Denomination::Rackoff => 25,
            Denomination::Pedersen => 50,
            Denomination::Williamson => 100,
        }
    }

    /// The amount this denomination represents, in base currency units (face value scaled
    /// by [`COIN`]). Exact for the whole accepted set.
    pub fn amount(self) -> i64 {
        self.face_value() as i64 * COIN
    }

    /// Look up the denomination whose scaled amount matches `amount` exactly.
    ///
    /// There is no rounding and no nearest match: anything but an exact table entry is
    /// [`Error::UnknownDenominationAmount`].
    pub fn from_amount(amount: i64) -> Result<Denomination, Error> {
        Denomination::ALL
            .iter()
            .copied()
            .find(|d| d.amount() == amount)
            .ok_or(Error::UnknownDenominationAmount(amount))
    }

    /// Parse a denomination label and return the amount it denominates, in base currency
    /// units.
    pub fn amount_from_label(label: &str) -> Result<i64, Error> {
        label.parse::<Denomination>().map(Denomination::amount)
    }

    /// The stable integer tag this denomination travels as on the wire: its face value.
    ///
    /// Zero is reserved for the invalid tag and is never produced. Existing serialized
    /// coins depend on this exact mapping; it must not change.
    pub fn to_tag(self) -> u32 {
        self.face_value() as u32
    }

    /// Map a wire tag back to its denomination. Rejects zero (the reserved invalid tag)
    /// and anything outside the fixed set.
    pub fn from_tag(tag: u32) -> Result<Denomination, Error> {
        Denomination::ALL
            .iter()
            .copied()
            .find(|d| d.to_tag() == tag)
            .ok_or(Error::UnknownDenominationTag(tag))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face_value())
    }
}

impl FromStr for Denomination {
    type Err = Error;

    /// Accepts exactly the labels `"1"`, `"10"`, `"25"`, `"50"` and `"100"`.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "1" => Ok(Denomination::Lovelace),
            "10" => Ok(Denomination::Goldwasser),
            "25" => Ok(Denomination::Rackoff),
            "50" => Ok(Denomination::Pedersen),
            "100" => Ok(Denomination::Williamson),
            _ => Err(Error::UnknownDenominationLabel(label.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_map_to_distinct_denominations() {
        let parsed: HashSet<Denomination> = ["1", "10", "25", "50", "100"]
            .iter()
            .map(|label| label.parse().unwrap())
            .collect();
        assert_eq!(parsed.len(), 5);
    }

    #[test]
    fn label_amount_and_face_value_agree() {
        for denomination in Denomination::ALL.iter().copied() {
            let label = denomination.to_string();
            assert_eq!(label.parse::<Denomination>().unwrap(), denomination);
            assert_eq!(
                Denomination::amount_from_label(&label).unwrap(),
                denomination.face_value() as i64 * COIN
            );
        }
    }

    #[test]
    fn unknown_labels_are_errors() {
        for label in ["0", "2", "1000", "ten", "", " 1"].iter() {
            assert!(matches!(
                label.parse::<Denomination>(),
                Err(Error::UnknownDenominationLabel(_))
            ));
            assert!(Denomination::amount_from_label(label).is_err());
        }
    }

    #[test]
    fn amount_lookup_is_exact() {
        for denomination in Denomination::ALL.iter().copied() {
            assert_eq!(
                Denomination::from_amount(denomination.amount()).unwrap(),
                denomination
            );
        }
        assert!(matches!(
            Denomination::from_amount(25 * COIN + 1),
            Err(Error::UnknownDenominationAmount(_))
        ));
        assert!(Denomination::from_amount(0).is_err());
    }

    #[test]
    fn wire_tags_roundtrip_and_zero_is_reserved() {
        for denomination in Denomination::ALL.iter().copied() {
            assert_eq!(
                Denomination::from_tag(denomination.to_tag()).unwrap(),
                denomination
            );
            assert_eq!(denomination.to_tag() as u64, denomination.face_value());
        }
        assert!(matches!(
            Denomination::from_tag(0),
            Err(Error::UnknownDenominationTag(0))
        ));
        assert!(Denomination::from_tag(7).is_err());
    }
}
