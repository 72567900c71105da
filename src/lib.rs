//! Compile-time CIE 1931 lightness lookup tables.
//!
//! Linear PWM duty cycles look wrong to the eye: the first half of the range
//! seems to do almost all of the brightening. The CIE 1931 lightness formula
//! corrects for this by mapping a linear control step to the luminance a
//! human perceives as evenly spaced. This crate evaluates that mapping for
//! every input step at compile time and stores the result as an immutable
//! table, so a microcontroller pays neither the float math nor any SRAM for
//! it.
//!
//! ```
//! use cie1931::LightnessTable;
//!
//! // 1001 input steps, 8-bit output; lives in flash/.rodata.
//! static RAMP: LightnessTable<u8, 1001> = LightnessTable::<u8, 1001>::new(255);
//!
//! // drive a PWM compare register from a wrap-around step counter
//! let mut step = 0;
//! let duty = RAMP.get(step);
//! step = (step + 1) % RAMP.size();
//! # let _ = (duty, step);
//! ```
//!
//! The table is read-only after construction, so interrupt handlers and
//! concurrent readers share it without locking. Out-of-range reads clamp to
//! the brightest entry instead of failing.

#![no_std]

pub mod curve;
pub mod table;

pub use crate::table::LightnessTable;
