// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Resistance value decoder for resistor colour codes.
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
 * # `decoder` Module
 *
 * This module converts a complete band-colour sequence into a resistance
 * value: a digit significand scaled by the multiplier band's decimal
 * factor, together with the unit prefix the multiplier colour selects.
 *
 * ## Usage Example
 *
 * ```
 * use bandcode::colour::BandColour;
 * use bandcode::decoder::DecodedResistance;
 * use bandcode::roles::ResistorType;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Red-red-orange-gold: 22 Kohm, 5%
 *     let bands = [
 *         BandColour::Red,
 *         BandColour::Red,
 *         BandColour::Orange,
 *         BandColour::Gold,
 *     ];
 *     let decoded = DecodedResistance::from_bands(ResistorType::R4, &bands)?;
 *     println!("{} {}ohm", decoded.value, decoded.prefix.symbol());
 *
 *     Ok(())
 * }
 * ```
 */

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::colour::BandColour;
use crate::roles::{ResistorType, TypeClass};

/// The unit prefix selected by a multiplier band colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPrefix {
    None,
    Kilo,
    Mega,
    Giga,
}

impl UnitPrefix {
    /// The display character for this prefix; a blank for [UnitPrefix::None]
    /// so the unit field keeps its fixed width.
    pub fn symbol(self) -> char {
        match self {
            Self::None => ' ',
            Self::Kilo => 'K',
            Self::Mega => 'M',
            Self::Giga => 'G',
        }
    }

    /// The scale this prefix applies to a displayed value.
    pub fn factor(self) -> Decimal {
        match self {
            Self::None => dec!(1),
            Self::Kilo => dec!(1000),
            Self::Mega => dec!(1000000),
            Self::Giga => dec!(1000000000),
        }
    }
}

/// The decimal factor a multiplier colour applies to the significand.
///
/// Brown, yellow, and purple are sub-unit multipliers on precision types
/// and tens-style multipliers everywhere else; the rest of the table is
/// class-independent.
pub fn decimal_factor(class: TypeClass, colour: BandColour) -> Decimal {
    match (class, colour) {
        (_, BandColour::Black | BandColour::Orange | BandColour::Blue | BandColour::White) => {
            dec!(1)
        }
        (TypeClass::Precision, BandColour::Brown | BandColour::Yellow | BandColour::Purple) => {
            dec!(0.01)
        }
        (TypeClass::Standard, BandColour::Brown | BandColour::Yellow | BandColour::Purple) => {
            dec!(10)
        }
        (_, BandColour::Red | BandColour::Green | BandColour::Gray | BandColour::Gold) => dec!(0.1),
        (_, BandColour::Silver) => dec!(0.01),
        (_, BandColour::Pink) => dec!(0.001),
    }
}

/// The unit prefix a multiplier colour selects, paralleling the
/// [decimal_factor] class split for brown, yellow, and purple.
pub fn unit_prefix(class: TypeClass, colour: BandColour) -> UnitPrefix {
    match (class, colour) {
        (TypeClass::Precision, BandColour::Brown) => UnitPrefix::Kilo,
        (TypeClass::Precision, BandColour::Yellow) => UnitPrefix::Mega,
        (TypeClass::Precision, BandColour::Purple) => UnitPrefix::Giga,
        (
            _,
            BandColour::Black
            | BandColour::Brown
            | BandColour::Gold
            | BandColour::Silver
            | BandColour::Pink,
        ) => UnitPrefix::None,
        (_, BandColour::Red | BandColour::Orange | BandColour::Yellow) => UnitPrefix::Kilo,
        (_, BandColour::Green | BandColour::Blue | BandColour::Purple) => UnitPrefix::Mega,
        (_, BandColour::Gray | BandColour::White) => UnitPrefix::Giga,
    }
}

/// A decoded resistance: the display value in units of [Self::prefix].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedResistance {
    /// The significand scaled by the multiplier's decimal factor.
    pub value: Decimal,
    /// The unit prefix selected by the multiplier band.
    pub prefix: UnitPrefix,
}

impl DecodedResistance {
    /// Decodes a band-colour sequence into a resistance.
    ///
    /// # Arguments
    ///
    /// * `rtype` - The resistor type the sequence belongs to.
    /// * `colours` - One colour per band, exactly `rtype.band_count()` long.
    ///
    /// # Returns
    ///
    /// A `Result` containing the decoded resistance, or an error if the
    /// sequence has the wrong length or a numeric band holds a non-digit
    /// colour.
    pub fn from_bands(
        rtype: ResistorType,
        colours: &[BandColour],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if colours.len() != rtype.band_count() {
            return Err(format!(
                "Expected {} bands for {:?}, got {}",
                rtype.band_count(),
                rtype,
                colours.len()
            )
            .into());
        }

        let mut significand: i64 = 0;
        for colour in &colours[..rtype.numeric_band_count()] {
            let digit = colour
                .digit()
                .ok_or_else(|| format!("{:?} is not a digit colour", colour))?;
            significand = significand * 10 + i64::from(digit);
        }

        // A 2-band resistor has no multiplier band; its digits stand alone.
        let (factor, prefix) = match rtype.multiplier_index() {
            Some(index) => {
                let colour = colours[index];
                (
                    decimal_factor(rtype.class(), colour),
                    unit_prefix(rtype.class(), colour),
                )
            }
            None => (Decimal::ONE, UnitPrefix::None),
        };

        Ok(Self {
            value: Decimal::from(significand) * factor,
            prefix,
        })
    }

    /// The absolute resistance in ohms.
    pub fn ohms(&self) -> Decimal {
        self.value * self.prefix.factor()
    }
}
