// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/display.rs - Fixed-width display formatting for resistor codes.
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
 * # `display` Module
 *
 * Fixed-width display formatting for decoded resistor codes. Each field
 * is a caller-owned byte buffer of a declared width; the writers reset the
 * buffer to blanks and overwrite only the portion the content occupies,
 * so trailing blanks survive and on-screen alignment stays fixed.
 *
 * ## Usage Example
 *
 * ```
 * use bandcode::colour::BandColour;
 * use bandcode::display::ResistorDisplay;
 * use bandcode::roles::ResistorType;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let bands = [
 *         BandColour::Red,
 *         BandColour::Red,
 *         BandColour::Orange,
 *         BandColour::Gold,
 *     ];
 *     let display = ResistorDisplay::from_bands(ResistorType::R4, &bands)?;
 *     println!("{}|{}|{}", display.calculation, display.tolerance, display.temp_coeff);
 *
 *     Ok(())
 * }
 * ```
 */

use rust_decimal::Decimal;

use crate::colour::BandColour;
use crate::decoder::DecodedResistance;
use crate::roles::ResistorType;

/// Width of the calculation field, "nnn Xohm" plus slack.
pub const CHARS_CALCULATION: usize = 12;
/// Width of the tolerance field, wide enough for "0.05%".
pub const CHARS_TOLERANCE: usize = 7;
/// Width of the temperature coefficient field, in ppm digits.
pub const CHARS_TEMP_COEFF: usize = 3;

const INDEX_NUMERIC: usize = 0;
const INDEX_MULTIPLIER: usize = 4;

/// The percentage text for a tolerance band colour, "--" for colours
/// outside the tolerance set.
pub fn tolerance_text(colour: BandColour) -> &'static str {
    match colour {
        BandColour::Brown => "1%",
        BandColour::Red => "2%",
        BandColour::Orange => "3%",
        BandColour::Yellow => "4%",
        BandColour::Green => "0.5%",
        BandColour::Blue => "0.25%",
        BandColour::Purple => "0.1%",
        BandColour::Gray => "0.05%",
        BandColour::Gold => "5%",
        BandColour::Silver => "10%",
        _ => "--",
    }
}

/// The ppm/K text for a temperature coefficient band colour, "--" for
/// colours outside the temperature coefficient set.
pub fn temp_coeff_text(colour: BandColour) -> &'static str {
    match colour {
        BandColour::Black => "250",
        BandColour::Brown => "100",
        BandColour::Red => "50",
        BandColour::Orange => "15",
        BandColour::Yellow => "25",
        BandColour::Green => "20",
        BandColour::Blue => "10",
        BandColour::Purple => "5",
        BandColour::Gray => "1",
        _ => "--",
    }
}

// Minimal decimal places that round-trip the value, no trailing zeros.
fn value_text(value: Decimal) -> String {
    value.normalize().to_string()
}

fn check_band_count(
    rtype: ResistorType,
    colours: &[BandColour],
) -> Result<(), Box<dyn std::error::Error>> {
    if colours.len() != rtype.band_count() {
        return Err(format!(
            "Expected {} bands for {:?}, got {}",
            rtype.band_count(),
            rtype,
            colours.len()
        )
        .into());
    }
    Ok(())
}

fn write_at(buffer: &mut [u8], offset: usize, text: &str) {
    buffer[offset..offset + text.len()].copy_from_slice(text.as_bytes());
}

/// Formats the decoded resistance and its unit into `out`.
///
/// The unit ("ohm" with the multiplier's prefix character) sits at a fixed
/// offset and is written first; a five-character value then overwrites the
/// unit's leading blank, matching the on-device layout.
pub fn write_calculation(
    rtype: ResistorType,
    colours: &[BandColour],
    out: &mut [u8; CHARS_CALCULATION],
) -> Result<(), Box<dyn std::error::Error>> {
    out.fill(b' ');
    let decoded = DecodedResistance::from_bands(rtype, colours)?;

    out[INDEX_MULTIPLIER] = decoded.prefix.symbol() as u8;
    write_at(out, INDEX_MULTIPLIER + 1, "ohm");
    write_at(out, INDEX_NUMERIC, &value_text(decoded.value));

    Ok(())
}

/// Formats the tolerance band into `out`. Types without a tolerance band
/// leave the field blank.
pub fn write_tolerance(
    rtype: ResistorType,
    colours: &[BandColour],
    out: &mut [u8; CHARS_TOLERANCE],
) -> Result<(), Box<dyn std::error::Error>> {
    out.fill(b' ');
    check_band_count(rtype, colours)?;
    if let Some(index) = rtype.tolerance_index() {
        write_at(out, 0, tolerance_text(colours[index]));
    }
    Ok(())
}

/// Formats the temperature coefficient band into `out`. Types without one
/// leave the field blank.
pub fn write_temp_coeff(
    rtype: ResistorType,
    colours: &[BandColour],
    out: &mut [u8; CHARS_TEMP_COEFF],
) -> Result<(), Box<dyn std::error::Error>> {
    out.fill(b' ');
    check_band_count(rtype, colours)?;
    if let Some(index) = rtype.temp_coeff_index() {
        write_at(out, 0, temp_coeff_text(colours[index]));
    }
    Ok(())
}

/// All display fields for one resistor, each at its fixed width.
#[derive(Debug)]
pub struct ResistorDisplay {
    /// Resistance value and unit, [CHARS_CALCULATION] characters.
    pub calculation: String,
    /// Tolerance percentage, [CHARS_TOLERANCE] characters.
    pub tolerance: String,
    /// Temperature coefficient in ppm/K, [CHARS_TEMP_COEFF] characters.
    pub temp_coeff: String,
}

impl ResistorDisplay {
    /// Formats a band-colour sequence into its display fields.
    ///
    /// # Arguments
    ///
    /// * `rtype` - The resistor type the sequence belongs to.
    /// * `colours` - One colour per band, exactly `rtype.band_count()` long.
    ///
    /// # Returns
    ///
    /// A `Result` containing the formatted fields or an error from the
    /// decode step.
    pub fn from_bands(
        rtype: ResistorType,
        colours: &[BandColour],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut calculation = [b' '; CHARS_CALCULATION];
        let mut tolerance = [b' '; CHARS_TOLERANCE];
        let mut temp_coeff = [b' '; CHARS_TEMP_COEFF];

        write_calculation(rtype, colours, &mut calculation)?;
        write_tolerance(rtype, colours, &mut tolerance)?;
        write_temp_coeff(rtype, colours, &mut temp_coeff)?;

        Ok(Self {
            calculation: String::from_utf8_lossy(&calculation).to_string(),
            tolerance: String::from_utf8_lossy(&tolerance).to_string(),
            temp_coeff: String::from_utf8_lossy(&temp_coeff).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_band_display() {
        let bands = [
            BandColour::Yellow,
            BandColour::Purple,
            BandColour::Black,
            BandColour::Black,
            BandColour::Brown,
            BandColour::Brown,
        ];
        let display = ResistorDisplay::from_bands(ResistorType::R6, &bands).unwrap();
        assert_eq!(display.calculation, "470  ohm    ");
        assert_eq!(display.tolerance, "1%     ");
        assert_eq!(display.temp_coeff, "100");
    }

    #[test]
    fn test_four_band_display() {
        let bands = [
            BandColour::Red,
            BandColour::Red,
            BandColour::Orange,
            BandColour::Gold,
        ];
        let display = ResistorDisplay::from_bands(ResistorType::R4, &bands).unwrap();
        assert_eq!(display.calculation, "22  Kohm    ");
        assert_eq!(display.tolerance, "5%     ");
        assert_eq!(display.temp_coeff, "   ");
    }

    #[test]
    fn test_whole_values_render_without_decimals() {
        let bands = [
            BandColour::Red,
            BandColour::Red,
            BandColour::Brown,
            BandColour::Gold,
        ];
        let mut out = [0u8; CHARS_CALCULATION];
        write_calculation(ResistorType::R4, &bands, &mut out).unwrap();
        assert_eq!(&out, b"220  ohm    ");
    }

    #[test]
    fn test_fractional_value_keeps_one_decimal() {
        let bands = [BandColour::Yellow, BandColour::Purple, BandColour::Gold];
        let mut out = [0u8; CHARS_CALCULATION];
        write_calculation(ResistorType::R3, &bands, &mut out).unwrap();
        assert_eq!(&out, b"4.7  ohm    ");
    }

    #[test]
    fn test_five_character_value_swallows_unit_pad() {
        // 99 x 0.001 renders five characters and runs into the unit's
        // leading blank.
        let bands = [BandColour::White, BandColour::White, BandColour::Pink];
        let mut out = [0u8; CHARS_CALCULATION];
        write_calculation(ResistorType::R3, &bands, &mut out).unwrap();
        assert_eq!(&out, b"0.099ohm    ");
    }

    #[test]
    fn test_zero_value_renders_bare_zero() {
        let bands = [BandColour::Black, BandColour::Black, BandColour::Black];
        let mut out = [0u8; CHARS_CALCULATION];
        write_calculation(ResistorType::R3, &bands, &mut out).unwrap();
        assert_eq!(&out, b"0    ohm    ");
    }

    #[test]
    fn test_tolerance_blank_when_band_absent() {
        let bands = [BandColour::Red, BandColour::Red, BandColour::Brown];
        let mut out = [0u8; CHARS_TOLERANCE];
        write_tolerance(ResistorType::R3, &bands, &mut out).unwrap();
        assert_eq!(&out, b"       ");
    }

    #[test]
    fn test_tolerance_placeholder_for_invalid_colour() {
        let bands = [
            BandColour::Red,
            BandColour::Red,
            BandColour::Brown,
            BandColour::Black,
        ];
        let mut out = [0u8; CHARS_TOLERANCE];
        write_tolerance(ResistorType::R4, &bands, &mut out).unwrap();
        assert_eq!(&out, b"--     ");
    }

    #[test]
    fn test_tolerance_texts() {
        assert_eq!(tolerance_text(BandColour::Brown), "1%");
        assert_eq!(tolerance_text(BandColour::Gray), "0.05%");
        assert_eq!(tolerance_text(BandColour::Gold), "5%");
        assert_eq!(tolerance_text(BandColour::Silver), "10%");
        assert_eq!(tolerance_text(BandColour::White), "--");
    }

    #[test]
    fn test_temp_coeff_blank_when_band_absent() {
        let bands = [
            BandColour::Red,
            BandColour::Red,
            BandColour::Brown,
            BandColour::Gold,
        ];
        let mut out = [0u8; CHARS_TEMP_COEFF];
        write_temp_coeff(ResistorType::R4, &bands, &mut out).unwrap();
        assert_eq!(&out, b"   ");
    }

    #[test]
    fn test_temp_coeff_texts() {
        assert_eq!(temp_coeff_text(BandColour::Black), "250");
        assert_eq!(temp_coeff_text(BandColour::Red), "50");
        assert_eq!(temp_coeff_text(BandColour::Gray), "1");
        assert_eq!(temp_coeff_text(BandColour::Gold), "--");
    }

    #[test]
    fn test_fields_keep_fixed_widths() {
        let bands = [BandColour::Yellow, BandColour::Purple];
        let display = ResistorDisplay::from_bands(ResistorType::R2, &bands).unwrap();
        assert_eq!(display.calculation.len(), CHARS_CALCULATION);
        assert_eq!(display.tolerance.len(), CHARS_TOLERANCE);
        assert_eq!(display.temp_coeff.len(), CHARS_TEMP_COEFF);
        assert_eq!(display.calculation, "47   ohm    ");
    }

    #[test]
    fn test_wrong_band_count_rejected() {
        let bands = [BandColour::Red, BandColour::Red];
        assert!(ResistorDisplay::from_bands(ResistorType::R6, &bands).is_err());
    }
}
