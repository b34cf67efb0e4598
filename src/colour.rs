// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/colour.rs - Band colour definitions for resistor colour codes.
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
 * # `colour` Module
 *
 * The thirteen band colours used by resistor colour codes, in their fixed
 * cycle order. The ordinal of a colour doubles as its digit value for the
 * first ten colours, and as its position when stepping through the colour
 * cycle during interactive editing.
 */

use std::str::FromStr;

/// Number of colours in the band colour cycle.
pub const COLOUR_COUNT: usize = 13;

/// One of the thirteen colours a resistor band can take.
///
/// The discriminant is the colour's ordinal in the cycle, 0 through 12.
/// The first ten colours (Black through White) are also the digit colours,
/// whose ordinal equals their digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColour {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Purple = 7,
    Gray = 8,
    White = 9,
    Gold = 10,
    Silver = 11,
    Pink = 12,
}

/// All colours in cycle order, indexable by ordinal.
pub const COLOUR_CYCLE: [BandColour; COLOUR_COUNT] = [
    BandColour::Black,
    BandColour::Brown,
    BandColour::Red,
    BandColour::Orange,
    BandColour::Yellow,
    BandColour::Green,
    BandColour::Blue,
    BandColour::Purple,
    BandColour::Gray,
    BandColour::White,
    BandColour::Gold,
    BandColour::Silver,
    BandColour::Pink,
];

impl BandColour {
    /// The colour's position in the cycle, 0 through 12.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a colour by ordinal. Returns `None` for ordinals above 12.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        COLOUR_CYCLE.get(usize::from(ordinal)).copied()
    }

    /// The digit value this colour encodes in a numeric band, or `None`
    /// for the three non-digit colours (Gold, Silver, Pink).
    pub fn digit(self) -> Option<u8> {
        if self.is_digit_colour() {
            Some(self as u8)
        } else {
            None
        }
    }

    /// Whether this colour is valid in a numeric digit band.
    pub fn is_digit_colour(self) -> bool {
        (self as u8) <= 9
    }

    /// Whether this colour is valid in a multiplier band. Every colour is.
    pub fn is_multiplier_colour(self) -> bool {
        true
    }

    /// Whether this colour is valid in a tolerance band.
    pub fn is_tolerance_colour(self) -> bool {
        matches!(
            self,
            Self::Brown
                | Self::Red
                | Self::Orange
                | Self::Yellow
                | Self::Green
                | Self::Blue
                | Self::Purple
                | Self::Gray
                | Self::Gold
                | Self::Silver
        )
    }

    /// Whether this colour is valid in a temperature coefficient band.
    pub fn is_temp_coeff_colour(self) -> bool {
        matches!(
            self,
            Self::Black
                | Self::Brown
                | Self::Red
                | Self::Orange
                | Self::Yellow
                | Self::Green
                | Self::Blue
                | Self::Purple
                | Self::Gray
        )
    }

    /// Fixed two-letter abbreviation for compact band displays.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Black => "Bk",
            Self::Brown => "Br",
            Self::Red => "Re",
            Self::Orange => "Or",
            Self::Yellow => "Ye",
            Self::Green => "Gr",
            Self::Blue => "Bl",
            Self::Purple => "Pu",
            Self::Gray => "Gy",
            Self::White => "Wh",
            Self::Gold => "Go",
            Self::Silver => "Si",
            Self::Pink => "Pi",
        }
    }
}

impl FromStr for BandColour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "brown" => Ok(Self::Brown),
            "red" => Ok(Self::Red),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "purple" | "violet" => Ok(Self::Purple),
            "gray" | "grey" => Ok(Self::Gray),
            "white" => Ok(Self::White),
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "pink" => Ok(Self::Pink),
            _ => Err(format!("Unknown band colour: {:?}", s)),
        }
    }
}
