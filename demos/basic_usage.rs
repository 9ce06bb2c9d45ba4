// ============================================================================
// Basic Usage Example
// ============================================================================

use holecalc::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Hole Calculator Example ===\n");

    // Three pins at nominal size
    println!("Three-pin bore (nominal)...");
    for (p1, p2, p3) in [
        (dec!(1), dec!(2), dec!(3)),
        (dec!(5), dec!(2), dec!(8)),
        (dec!(0.113), dec!(0.278), dec!(0.156)),
        (dec!(50), dec!(1), dec!(0.01)),
    ] {
        match hole_from_nominal(p1, p2, p3) {
            Ok(hole) => println!("  {}, {}, {} -> {}", p1, p2, p3, quantize(hole, 3)),
            Err(err) => println!("  {}, {}, {} -> error: {}", p1, p2, p3, err),
        }
    }

    // Gauge pin tolerance bounds
    println!("\n=== Gauge Pin Bounds ===");
    for (spec, units) in [
        (PinSpec::parse("1.000", "ZZ", "-"), UnitSystem::Inch),
        (PinSpec::parse("0.2500", "XX", "+"), UnitSystem::Inch),
        (PinSpec::parse("25.35", "ZZ", "+"), UnitSystem::Millimeter),
    ] {
        let spec = match spec {
            Ok(spec) => spec,
            Err(err) => {
                println!("  invalid pin: {}", err);
                continue;
            }
        };
        match pin_tolerance_bounds(&spec, units) {
            Ok((min, max)) => {
                let places = units.pin_display_places();
                println!(
                    "  {} {} -> {} .. {}",
                    spec,
                    units,
                    quantize(min, places),
                    quantize(max, places)
                );
            }
            Err(err) => println!("  {} {} -> error: {}", spec, units, err),
        }
    }

    // Toleranced three-pin measurement
    println!("\n=== Toleranced Bore ===");
    let pins = [
        PinSpec::new(dec!(64.25), ToleranceClass::Y, Sign::Plus),
        PinSpec::new(dec!(11.10), ToleranceClass::Z, Sign::Plus),
        PinSpec::new(dec!(25.35), ToleranceClass::ZZ, Sign::Plus),
    ];
    match hole_bounds_from_tolerance_classes(&pins[0], &pins[1], &pins[2], UnitSystem::Millimeter)
    {
        Ok((min, max)) => println!("  min {} max {}", quantize(min, 3), quantize(max, 3)),
        Err(err) => println!("  error: {}", err),
    }

    // Reverse calculation
    println!("\n=== Remaining Pin ===");
    match remaining_pin(dec!(240.219), dec!(64.25), dec!(11.1)) {
        Ok(pin) => println!("  bore 240.219 with 64.25 and 11.1 -> {}", quantize(pin, 4)),
        Err(err) => println!("  error: {}", err),
    }

    // Extended precision
    println!("\n=== Extended Precision ===");
    match create_from_config(CalcConfig::extended()) {
        Ok(calc) => match calc.hole_from_nominal(dec!(1), dec!(2), dec!(3)) {
            Ok(hole) => println!("  {:?}: 1, 2, 3 -> {}", calc, hole),
            Err(err) => println!("  error: {}", err),
        },
        Err(err) => println!("  config error: {}", err),
    }
}
