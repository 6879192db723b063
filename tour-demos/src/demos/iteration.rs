//! Lazy generators and a hand-written iteration protocol.

use tour_kit::{Demo, DemoError, Transcript};
use tour_kit_macros::AutoRegisterDemo;

use crate::utils::natural_range::natural_range;
use crate::utils::protocol::ItemCursor;

#[derive(AutoRegisterDemo)]
#[demo(name = "iteration", order = 2, tags = ["iterators"])]
pub struct IterationDemo;

impl Demo for IterationDemo {
    fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
        for i in natural_range(3) {
            transcript.line(i);
        }

        let iterable = ItemCursor::new(vec![1, 2, 3]);
        for val in iterable {
            transcript.line(val);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_then_protocol() {
        let mut transcript = Transcript::new();
        IterationDemo::run(&mut transcript).unwrap();
        assert_eq!(transcript.lines(), ["1", "2", "3", "1", "2", "3"]);
    }
}
