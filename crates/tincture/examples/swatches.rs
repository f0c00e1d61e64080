#![allow(clippy::print_stdout)]

use tincture::error::ColourError;
use tincture::hash::HashBounds;
use tincture::named::css3_names;
use tincture::{Colour, Preserve, SwatchOptions};

fn main() -> Result<(), ColourError> {
    let options = SwatchOptions::default();

    println!("<!DOCTYPE html>");
    println!("<html><head><meta charset=\"utf-8\"><title>Swatches</title></head><body>");

    println!("<h2>CSS3</h2>\n<p>");
    for name in css3_names() {
        println!("{}", Colour::from_css3(name)?.swatch(&options));
    }
    println!("</p>");

    println!("<h2>Hashes</h2>\n<p>");
    let reddish = HashBounds::builder().hue(-30.0, 30.0).build()?;
    for word in ["tremby", "yappy", "mon", "bill", "ferris", "crab"] {
        println!(
            "{} {}",
            Colour::from_hash(word)?.swatch(&options),
            Colour::from_hash_within(word, &reddish)?.swatch(&options)
        );
    }
    println!("</p>");

    println!("<h2>Hue Shifts</h2>");
    for preserve in [Preserve::Nothing, Preserve::Luma] {
        println!("<p>");
        let mut colour = Colour::from_css3("blue")?;
        for _ in 0..12 {
            println!("{}", colour.swatch(&options));
            colour.shift_hue(30.0, preserve)?;
        }
        println!("</p>");
    }

    println!("</body></html>");
    Ok(())
}
