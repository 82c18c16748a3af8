//! Driver Demo
//!
//! Runs the same behaviour checks against the headless engine and the
//! terminal keypad, then replays a few scripts on both.
//!
//! Run with: cargo run --example driver_demo

#![allow(clippy::unwrap_used)]

use desk_calculator::driver::{
    run_all_checks, verify_chained_arithmetic, verify_division_by_zero, CalculatorDriver,
    EngineDriver, TuiDriver,
};

const SCRIPTS: &[&str] = &[
    "2 + 3 * 4 =",
    "1 0 - 2 - 3 =",
    "7 ÷ 2 =",
    "1 / 3 =",
    "1 2 . 5 ± * 4 =",
    "5 0 %",
    "5 / 0 =",
];

fn replay<D: CalculatorDriver>(name: &str, driver: &mut D) {
    println!("{name}:");
    for script in SCRIPTS {
        match driver.clear().and_then(|()| driver.press_sequence(script)) {
            Ok(()) => println!("   {script:<20} -> {}", driver.display()),
            Err(e) => println!("   {script:<20} -> rejected: {e}"),
        }
    }
    println!();
}

fn main() {
    println!("Desk Calculator: one set of checks, two front ends");
    println!();

    let mut engine = EngineDriver::new();
    let mut tui = TuiDriver::new();

    replay("EngineDriver", &mut engine);
    replay("TuiDriver (clicks on a 40x24 screen)", &mut tui);

    verify_chained_arithmetic(&mut engine).unwrap();
    verify_division_by_zero(&mut tui).unwrap();
    println!("Spot checks passed");

    run_all_checks(&mut engine).unwrap();
    run_all_checks(&mut tui).unwrap();
    println!("Full check suite passed on both drivers");
}
