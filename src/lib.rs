// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder and formatter library for resistor colour codes.
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
 * # `bandcode` Crate
 *
 * A library for decoding, editing, and formatting electronic resistor
 * colour-band codes.
 *
 * This crate provides the full pipeline for working with 2- through 6-band
 * resistor codes:
 *
 * 1. [roles]: Classifies which semantic role each band plays for a given
 *    resistor type (digit, multiplier, tolerance, temperature coefficient).
 * 2. [cycler]: Steps a band's colour up or down to the next colour valid
 *    for its role, for interactive editing.
 * 3. [decoder]: Converts a complete band-colour sequence into a resistance
 *    value and unit prefix.
 * 4. [display]: Renders resistance, tolerance, and temperature coefficient
 *    as fixed-width display strings.
 *
 * All operations are pure functions over caller-owned data; the crate
 * keeps no state of its own.
 *
 * ## Usage Example
 *
 * ```
 * use bandcode::colour::BandColour;
 * use bandcode::cycler::{next_colour, Direction};
 * use bandcode::display::ResistorDisplay;
 * use bandcode::roles::ResistorType;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // A 4-band resistor: red-red-orange-gold.
 *     let mut bands = [
 *         BandColour::Red,
 *         BandColour::Red,
 *         BandColour::Orange,
 *         BandColour::Gold,
 *     ];
 *
 *     // Format the code for display.
 *     let display = ResistorDisplay::from_bands(ResistorType::R4, &bands)?;
 *     println!("{}", display.calculation);
 *     println!("{}", display.tolerance);
 *
 *     // Step the first digit band up to the next valid colour.
 *     bands[0] = next_colour(ResistorType::R4, 0, bands[0], Direction::Increment);
 *     assert_eq!(bands[0], BandColour::Orange);
 *
 *     Ok(())
 * }
 * ```
 */

pub mod colour;
pub mod cycler;
pub mod decoder;
pub mod display;
pub mod roles;
