//! Packing arguments into a call and unpacking collections back into one.

use std::collections::BTreeMap;
use std::fmt::Display;

use tour_kit::{Demo, DemoError, Transcript};
use tour_kit_macros::AutoRegisterDemo;

use crate::pack;
use crate::utils::packing::Packed;

#[derive(AutoRegisterDemo)]
#[demo(name = "args", order = 1, tags = ["functions"])]
pub struct ArgsDemo;

/// Writes every positional value, then every named value.
pub fn func<T: Display>(packed: &Packed<T>, transcript: &mut Transcript) {
    for arg in packed.positional() {
        transcript.line(arg);
    }
    for kwarg in packed.named().values() {
        transcript.line(kwarg);
    }
}

impl Demo for ArgsDemo {
    fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
        func(&pack!(1, 2, 3; a = 4, b = 5, c = 6), transcript);

        // Same call, built from collections
        let list_args = vec![1, 2, 3];
        let dict_args = BTreeMap::from([("a", 4), ("b", 5), ("c", 6)]);
        func(&pack!(*list_args, **dict_args), transcript);

        Ok(())
    }
}
