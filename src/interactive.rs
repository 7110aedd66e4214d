use std::io::{self, BufRead, Write};

use ukgeo_application::{ErrorKind, Geolocator};
use ukgeo_entities::postcode::is_valid_postcode;

use crate::display;

const BANNER: &str = "\
╔══════════════════════════════════════╗
║       UPRN Coordinate Lookup         ║
║  Postcode + Address → Coordinates    ║
╚══════════════════════════════════════╝
Type 'q' to quit.
";

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Read a trimmed line, `None` at the end of the input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompt for postcodes and addresses until the user quits.
pub fn run<R, W>(geolocator: &Geolocator, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    loop {
        let Some(postcode) = prompt(&mut input, &mut output, "\nPostcode:        ")? else {
            writeln!(output, "\nBye!")?;
            break;
        };
        if QUIT_COMMANDS.contains(&postcode.to_lowercase().as_str()) {
            writeln!(output, "Bye!")?;
            break;
        }
        if postcode.is_empty() {
            writeln!(output, "  ✗ Postcode is required.")?;
            continue;
        }
        if !is_valid_postcode(&postcode) {
            writeln!(output, "  ✗ Invalid UK postcode format: '{postcode}'")?;
            continue;
        }

        let Some(address) = prompt(&mut input, &mut output, "Address line 1:  ")? else {
            writeln!(output, "\nBye!")?;
            break;
        };
        if address.is_empty() {
            writeln!(output, "  ✗ Address line 1 is required.")?;
            continue;
        }

        match geolocator.find_coordinates(&postcode, &address) {
            Ok(res) => {
                let confidence = display::confidence(res.match_score);
                writeln!(output, "  ✓ Match found ({confidence} confidence)")?;
                writeln!(output)?;
                writeln!(output, "{}", display::boxed(&res))?;
            }
            Err(err) if err.kind() == ErrorKind::NoMatchFound => {
                writeln!(
                    output,
                    "  ✗ No matching UPRN for '{postcode}' / '{address}'"
                )?;
            }
            Err(err) => {
                log::debug!("Lookup failed: {err}");
                writeln!(output, "  ✗ Error: {err}")?;
            }
        }
    }
    Ok(())
}
