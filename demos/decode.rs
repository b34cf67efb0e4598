// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  decode.rs - Colour-code decoding demo for resistor band codes.
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

use clap::Parser;

use bandcode::colour::BandColour;
use bandcode::decoder::*;
use bandcode::display::*;
use bandcode::roles::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The band colours, first band leftmost (e.g. red red orange gold).
    colours: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let rtype = match ResistorType::from_band_count(args.colours.len()) {
        Some(rtype) => rtype,
        None => {
            eprintln!(
                "Error: expected 2 to 6 band colours, got {}",
                args.colours.len()
            );
            return;
        }
    };

    let mut bands = Vec::new();
    for name in &args.colours {
        match name.parse::<BandColour>() {
            Ok(colour) => bands.push(colour),
            Err(error) => {
                eprintln!("Error: {}", error);
                return;
            }
        }
    }

    let decoded = match DecodedResistance::from_bands(rtype, &bands) {
        Ok(decoded) => decoded,
        Err(error) => {
            eprintln!("Error decoding bands: {}", error);
            return;
        }
    };

    let display = match ResistorDisplay::from_bands(rtype, &bands) {
        Ok(display) => display,
        Err(error) => {
            eprintln!("Error formatting bands: {}", error);
            return;
        }
    };

    let short_names: Vec<&str> = bands.iter().map(|c| c.short_name()).collect();
    println!("Bands:       {}", short_names.join(" "));
    println!("Resistance:  {}", display.calculation.trim_end());
    println!("Ohms:        {}", decoded.ohms());
    if rtype.has_tolerance() {
        println!("Tolerance:   {}", display.tolerance.trim_end());
    }
    if rtype.has_temp_coeff() {
        println!("Temp coeff:  {} ppm/K", display.temp_coeff.trim_end());
    }
}
