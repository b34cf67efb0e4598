// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/cycler.rs - Interactive colour cycling for resistor bands.
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
 * # `cycler` Module
 *
 * The interactive "press up/down to change this band's colour" operation:
 * starting from a band's current colour, step through the thirteen-colour
 * cycle until a colour valid for that band's role comes up, wrapping at
 * both ends.
 */

use crate::colour::{BandColour, COLOUR_COUNT, COLOUR_CYCLE};
use crate::roles::{BandRole, ResistorType};

/// Step direction when cycling a band's colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    fn delta(self) -> i16 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// Returns the next colour valid for band `band_index` of `rtype`,
/// stepping from `current` in `direction` and wrapping through the full
/// colour cycle.
///
/// Every role's valid set is non-empty, so at most one full lap of the
/// cycle is walked. A band whose role is [BandRole::Unused] keeps its
/// current colour.
pub fn next_colour(
    rtype: ResistorType,
    band_index: usize,
    current: BandColour,
    direction: Direction,
) -> BandColour {
    let role = rtype.band_role(band_index);
    if role == BandRole::Unused {
        return current;
    }

    let cycle = COLOUR_COUNT as i16;
    let mut position = i16::from(current.ordinal());
    loop {
        position = (position + direction.delta()).rem_euclid(cycle);
        let candidate = COLOUR_CYCLE[position as usize];
        if role.admits(candidate) {
            return candidate;
        }
    }
}
