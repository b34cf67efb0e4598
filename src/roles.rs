// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/roles.rs - Band role classification for resistor colour codes.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `roles` Module
 *
 * Role classification for resistor bands: given a resistor type (2 to 6
 * bands) and a band index, this module answers which semantic role that
 * band plays. Role assignment is a fixed per-type table and never changes
 * at runtime.
 */

use crate::colour::BandColour;

/// A resistor type, named by its band count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResistorType {
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
}

/// All resistor types, in band-count order.
pub const RESISTOR_TYPES: [ResistorType; 5] = [
    ResistorType::R2,
    ResistorType::R3,
    ResistorType::R4,
    ResistorType::R5,
    ResistorType::R6,
];

/// How a resistor type interprets its multiplier colours.
///
/// Precision (5- and 6-band) resistors reuse brown, yellow, and purple for
/// sub-unit multipliers; all other types use them for tens-style
/// multipliers. This is a domain rule, not an encoding quirk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Standard,
    Precision,
}

/// The semantic role a band plays at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    NumericDigit,
    Multiplier,
    Tolerance,
    TemperatureCoefficient,
    Unused,
}

impl BandRole {
    /// Whether `colour` is valid for a band playing this role.
    ///
    /// An `Unused` band admits no colour.
    pub fn admits(self, colour: BandColour) -> bool {
        match self {
            Self::NumericDigit => colour.is_digit_colour(),
            Self::Multiplier => colour.is_multiplier_colour(),
            Self::Tolerance => colour.is_tolerance_colour(),
            Self::TemperatureCoefficient => colour.is_temp_coeff_colour(),
            Self::Unused => false,
        }
    }
}

/// Role assignment for one resistor type.
///
/// Absent roles are `None` rather than a sentinel index, so "this type has
/// no tolerance band" is explicit in the type.
struct RoleTable {
    numeric_bands: usize,
    multiplier_index: Option<usize>,
    tolerance_index: Option<usize>,
    temp_coeff_index: Option<usize>,
}

// Indexed by band count - 2. A 2-band resistor carries two bare digit
// bands and nothing else.
const ROLE_TABLES: [RoleTable; 5] = [
    RoleTable {
        numeric_bands: 2,
        multiplier_index: None,
        tolerance_index: None,
        temp_coeff_index: None,
    },
    RoleTable {
        numeric_bands: 2,
        multiplier_index: Some(2),
        tolerance_index: None,
        temp_coeff_index: None,
    },
    RoleTable {
        numeric_bands: 2,
        multiplier_index: Some(2),
        tolerance_index: Some(3),
        temp_coeff_index: None,
    },
    RoleTable {
        numeric_bands: 3,
        multiplier_index: Some(3),
        tolerance_index: Some(4),
        temp_coeff_index: None,
    },
    RoleTable {
        numeric_bands: 3,
        multiplier_index: Some(3),
        tolerance_index: Some(4),
        temp_coeff_index: Some(5),
    },
];

impl ResistorType {
    /// Number of bands on this resistor type.
    pub fn band_count(self) -> usize {
        self as usize
    }

    /// Looks up a resistor type by band count. Returns `None` outside 2-6.
    pub fn from_band_count(bands: usize) -> Option<Self> {
        match bands {
            2 => Some(Self::R2),
            3 => Some(Self::R3),
            4 => Some(Self::R4),
            5 => Some(Self::R5),
            6 => Some(Self::R6),
            _ => None,
        }
    }

    /// The multiplier interpretation class of this type.
    pub fn class(self) -> TypeClass {
        match self {
            Self::R5 | Self::R6 => TypeClass::Precision,
            _ => TypeClass::Standard,
        }
    }

    fn table(self) -> &'static RoleTable {
        &ROLE_TABLES[self.band_count() - 2]
    }

    /// Number of leading bands acting as significant digits.
    pub fn numeric_band_count(self) -> usize {
        self.table().numeric_bands
    }

    /// Index of the multiplier band, if this type has one.
    pub fn multiplier_index(self) -> Option<usize> {
        self.table().multiplier_index
    }

    /// Index of the tolerance band, if this type has one.
    pub fn tolerance_index(self) -> Option<usize> {
        self.table().tolerance_index
    }

    /// Index of the temperature coefficient band, if this type has one.
    pub fn temp_coeff_index(self) -> Option<usize> {
        self.table().temp_coeff_index
    }

    pub fn has_tolerance(self) -> bool {
        self.tolerance_index().is_some()
    }

    pub fn has_temp_coeff(self) -> bool {
        self.temp_coeff_index().is_some()
    }

    /// The role band `index` plays for this type, `Unused` for indices
    /// past the band count or with no assignment.
    pub fn band_role(self, index: usize) -> BandRole {
        let table = self.table();
        if index < table.numeric_bands {
            BandRole::NumericDigit
        } else if table.multiplier_index == Some(index) {
            BandRole::Multiplier
        } else if table.tolerance_index == Some(index) {
            BandRole::Tolerance
        } else if table.temp_coeff_index == Some(index) {
            BandRole::TemperatureCoefficient
        } else {
            BandRole::Unused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_band_counts() {
        let counts: Vec<usize> = RESISTOR_TYPES
            .iter()
            .map(|t| t.numeric_band_count())
            .collect();
        assert_eq!(counts, vec![2, 2, 2, 3, 3]);
    }

    #[test]
    fn test_role_presence() {
        assert!(!ResistorType::R2.has_tolerance());
        assert!(!ResistorType::R3.has_tolerance());
        assert!(ResistorType::R4.has_tolerance());
        assert!(ResistorType::R5.has_tolerance());
        assert!(ResistorType::R6.has_tolerance());

        for rtype in RESISTOR_TYPES {
            assert_eq!(rtype.has_temp_coeff(), rtype == ResistorType::R6);
        }

        assert_eq!(ResistorType::R2.multiplier_index(), None);
        assert_eq!(ResistorType::R4.multiplier_index(), Some(2));
        assert_eq!(ResistorType::R6.multiplier_index(), Some(3));
    }

    #[test]
    fn test_six_band_roles() {
        let rtype = ResistorType::R6;
        assert_eq!(rtype.band_role(0), BandRole::NumericDigit);
        assert_eq!(rtype.band_role(1), BandRole::NumericDigit);
        assert_eq!(rtype.band_role(2), BandRole::NumericDigit);
        assert_eq!(rtype.band_role(3), BandRole::Multiplier);
        assert_eq!(rtype.band_role(4), BandRole::Tolerance);
        assert_eq!(rtype.band_role(5), BandRole::TemperatureCoefficient);
        assert_eq!(rtype.band_role(6), BandRole::Unused);
    }

    #[test]
    fn test_every_band_has_exactly_one_role() {
        // Occupied role indices never overlap within a type, and every
        // index below the band count is assigned.
        for rtype in RESISTOR_TYPES {
            for index in 0..rtype.band_count() {
                assert_ne!(
                    rtype.band_role(index),
                    BandRole::Unused,
                    "{:?} band {} is unassigned",
                    rtype,
                    index
                );
            }
            let special: Vec<usize> = [
                rtype.multiplier_index(),
                rtype.tolerance_index(),
                rtype.temp_coeff_index(),
            ]
            .into_iter()
            .flatten()
            .collect();
            for index in &special {
                assert!(*index >= rtype.numeric_band_count());
                assert!(*index < rtype.band_count());
            }
            let mut deduped = special.clone();
            deduped.dedup();
            assert_eq!(special, deduped);
        }
    }

    #[test]
    fn test_type_class() {
        assert_eq!(ResistorType::R2.class(), TypeClass::Standard);
        assert_eq!(ResistorType::R4.class(), TypeClass::Standard);
        assert_eq!(ResistorType::R5.class(), TypeClass::Precision);
        assert_eq!(ResistorType::R6.class(), TypeClass::Precision);
    }

    #[test]
    fn test_from_band_count() {
        for rtype in RESISTOR_TYPES {
            assert_eq!(ResistorType::from_band_count(rtype.band_count()), Some(rtype));
        }
        assert_eq!(ResistorType::from_band_count(1), None);
        assert_eq!(ResistorType::from_band_count(7), None);
    }

    #[test]
    fn test_unused_role_admits_nothing() {
        assert!(!BandRole::Unused.admits(BandColour::Black));
        assert!(!BandRole::Unused.admits(BandColour::Pink));
    }
}
