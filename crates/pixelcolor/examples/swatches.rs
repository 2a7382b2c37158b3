/// Swatches: Derived colors for a handful of base colors.
///
/// For each color given on the command line, or a few defaults if there are
/// none, this example prints a row of 24-bit color swatches: the base color,
/// its tints, its shades, its complement, and its grayscale version. It also
/// prints whether white or black text has enough contrast on the base color.
/// Colors use hashed hexadecimal notation, e.g., `#d6a5a4`.
use std::error::Error;
use std::io::{stdout, Write};

use pixelcolor::{Color, ColorSpace, ContrastContext, GrayscaleMode};

fn swatch(out: &mut impl Write, color: &Color) -> std::io::Result<()> {
    let [r, g, b, _] = color.to_rgba8();
    let text = if color.is_dark() { Color::WHITE } else { Color::BLACK };
    let [tr, tg, tb, _] = text.to_rgba8();

    write!(
        out,
        "\x1b[38;2;{};{};{};48;2;{};{};{}m {} \x1b[0m",
        tr,
        tg,
        tb,
        r,
        g,
        b,
        color.to_hex()
    )
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = ["#d6a5a4", "#1e90ff", "#2e8b57", "#ffd700"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let mut out = stdout().lock();
    for arg in &args {
        let base = arg.parse::<Color>()?;

        swatch(&mut out, &base)?;
        for amount in [0.25, 0.5] {
            swatch(&mut out, &base.tinted(amount))?;
        }
        for amount in [0.25, 0.5] {
            swatch(&mut out, &base.shaded(amount))?;
        }
        swatch(&mut out, &base.complement())?;
        swatch(&mut out, &base.grayscale(GrayscaleMode::Weighted))?;
        swatch(&mut out, &base.mixed(ColorSpace::Lab, 0.5, &base.complement()))?;

        let on_white = base.contrast_ratio(&Color::WHITE);
        let on_black = base.contrast_ratio(&Color::BLACK);
        writeln!(
            out,
            "  white {:5.2}{}  black {:5.2}{}",
            on_white,
            if base.is_contrasting(&Color::WHITE, ContrastContext::Standard) { " ✓" } else { "  " },
            on_black,
            if base.is_contrasting(&Color::BLACK, ContrastContext::Standard) { " ✓" } else { "  " },
        )?;
    }

    Ok(())
}

fn main() {
    let result = run();
    if let Err(error) = result {
        println!("\nError: {}", error);
        if let Some(inner) = error.source() {
            println!("    -> {}", inner);
        }
    }
}
