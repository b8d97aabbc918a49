//! Prints one color in every supported representation.

use chroma_record::{ColorRecord, Hue};

fn main() {
    let arg = std::env::args().nth(1).unwrap_or_else(|| "3B82F6".to_string());
    let color = match ColorRecord::try_from_hex(&arg) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("{arg}: {err}");
            std::process::exit(1);
        }
    };

    println!("hex       {}", color.to_hex(true));
    println!("int       {:#010X}", color.to_hex_int(true));
    println!("rgba      {:?}", color.to_rgba());
    println!("hsla      {:?}", color.to_hsla());
    println!("hsva      {:?}", color.to_hsva());
    println!("luma      {:?}", color.to_luma_chroma_hue());

    let hsl = color.to_hsl();
    let back = ColorRecord::from_hsl(Hue::Defined(hsl.hue), hsl.saturation, hsl.lightness);
    println!("hsl → rgb {}", back.to_hex(false));
}
