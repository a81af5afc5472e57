use complexkit::prelude::*;

fn main() -> Result<(), ComplexError> {
    let z1: Complex = "3 + 4i".parse()?;
    let z2 = Complex::new(1.0, -2.0);

    println!("z1 = {}", z1);
    println!("z2 = {}", z2);
    println!("z1 + z2 = {}", z1 + z2);
    println!("z1 - z2 = {}", z1 - z2);
    println!("z1 * z2 = {}", z1 * z2);
    println!("z1 / z2 = {}", (z1 / z2)?);
    println!("|z1| = {}", z1.abs());
    println!("1 / z1 = {:.4}", z1.inverse()?);
    println!("z1 = {}", z1.trigonometric_form());

    println!("\n=== Powers ===");
    println!("z2^3 = {}", z2.powi(3)?);
    println!("z2^-2 = {:.4}", z2.powi(-2)?);
    println!("z1^0.5 = {:.6}", z1.powf(0.5));
    println!("i^i = {:.6}", Complex::I.powc(&Complex::I));
    println!("0^(1 + i) = {}", Complex::ZERO.powc(&Complex::new(1.0, 1.0)));

    println!("\n=== Errors ===");
    match z1 / Complex::ZERO {
        Ok(q) => println!("z1 / 0 = {}", q),
        Err(e) => println!("z1 / 0: {}", e),
    }
    match "2.5".parse::<Complex>() {
        Ok(z) => println!("parsed {}", z),
        Err(e) => println!("\"2.5\": {}", e),
    }

    Ok(())
}
