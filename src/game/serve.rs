// Serve direction source

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

/// Source of uniform picks from {-1, +1} used to aim each relaunch.
pub trait SignSource {
    fn next_sign(&mut self) -> i32;
}

/// Coin flips from the thread-local RNG
pub struct RandomSigns {
    rng: ThreadRng,
}

impl RandomSigns {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl SignSource for RandomSigns {
    fn next_sign(&mut self) -> i32 {
        if self.rng.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }
}

/// Replays a fixed sequence of signs, wrapping around at the end.
#[cfg(test)]
pub struct ScriptedSigns {
    signs: Vec<i32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedSigns {
    pub fn new(signs: &[i32]) -> Self {
        assert!(!signs.is_empty(), "scripted sign sequence must not be empty");
        Self {
            signs: signs.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl SignSource for ScriptedSigns {
    fn next_sign(&mut self) -> i32 {
        let sign = self.signs[self.next % self.signs.len()];
        self.next += 1;
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_signs_are_unit() {
        let mut signs = RandomSigns::new();
        for _ in 0..200 {
            let sign = signs.next_sign();
            assert!(sign == 1 || sign == -1);
        }
    }

    #[test]
    fn test_scripted_signs_wrap() {
        let mut signs = ScriptedSigns::new(&[1, -1]);
        let drawn: Vec<i32> = (0..5).map(|_| signs.next_sign()).collect();
        assert_eq!(drawn, vec![1, -1, 1, -1, 1]);
    }
}
