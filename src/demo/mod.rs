// ============================================================================
// Demonstration Driver
// Exercises each operation with fixed sample inputs and prints the results
// ============================================================================

use crate::calculator::{add, divide, multiply, subtract};
use crate::numeric::{CalcResult, Number};
use std::io::{self, Write};

/// Width of the separator line under the title
const SEPARATOR_WIDTH: usize = 40;

/// Render a division result: the quotient, or the sentinel error text.
fn render(result: CalcResult<Number>) -> String {
    match result {
        Ok(quotient) => quotient.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Write the demonstration report to `out`.
///
/// The output is byte-exact: title, 40-character separator, one labeled
/// line per operation with operands 10 and 5, a blank line, and the
/// completion message.
pub fn write_report(out: &mut impl Write) -> io::Result<()> {
    let a = Number::from(10);
    let b = Number::from(5);

    writeln!(out, "Simple Calculator Test")?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;

    writeln!(out, "{} + {} = {}", a, b, add(a, b))?;
    writeln!(out, "{} - {} = {}", a, b, subtract(a, b))?;
    writeln!(out, "{} * {} = {}", a, b, multiply(a, b))?;
    writeln!(out, "{} / {} = {}", a, b, render(divide(a, b)))?;

    writeln!(out)?;
    writeln!(out, "Calculator test completed successfully!")?;

    Ok(())
}

/// Print the demonstration report to standard output.
pub fn run() -> io::Result<()> {
    tracing::debug!("running calculator demonstration");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle)?;
    handle.flush()?;

    tracing::debug!("calculator demonstration complete");
    Ok(())
}
