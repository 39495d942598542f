//! Queue module - random next-block generation
//!
//! The queue holds exactly one upcoming block. Drawing hands that block out
//! (freshly reset) and samples a replacement uniformly over the seven
//! shapes, re-rolling while the sample matches the shape just handed out,
//! so two consecutive draws never share a shape.
//!
//! Seeded queues use `ChaCha8Rng` so a seed reproduces the same sequence
//! on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::block::Block;
use crate::types::ShapeKind;

#[derive(Debug, Clone)]
pub struct BlockQueue {
    next: Block,
    rng: ChaCha8Rng,
}

impl BlockQueue {
    /// Create a deterministic queue from a seed
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a queue seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Self {
        let next = Block::new(random_kind(&mut rng));
        Self { next, rng }
    }

    /// The block the next draw will return
    pub fn next(&self) -> &Block {
        &self.next
    }

    /// Take the queued block and sample its successor
    pub fn get_and_update(&mut self) -> Block {
        let mut block = self.next;
        block.reset();

        let mut kind = random_kind(&mut self.rng);
        while kind == block.kind() {
            kind = random_kind(&mut self.rng);
        }
        self.next = Block::new(kind);

        block
    }
}

fn random_kind(rng: &mut impl Rng) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_deterministic() {
        let mut q1 = BlockQueue::new(12345);
        let mut q2 = BlockQueue::new(12345);

        for _ in 0..100 {
            assert_eq!(q1.get_and_update(), q2.get_and_update());
        }
    }

    #[test]
    fn test_draw_matches_peek() {
        let mut queue = BlockQueue::new(7);
        for _ in 0..20 {
            let peeked = queue.next().kind();
            assert_eq!(queue.get_and_update().kind(), peeked);
        }
    }

    #[test]
    fn test_no_immediate_repeat() {
        let mut queue = BlockQueue::new(99);
        let mut previous = queue.get_and_update().kind();
        for _ in 0..500 {
            let kind = queue.get_and_update().kind();
            assert_ne!(kind, previous);
            previous = kind;
        }
    }

    #[test]
    fn test_all_shapes_appear() {
        let mut queue = BlockQueue::new(1);
        let mut seen = [false; 7];
        for _ in 0..200 {
            seen[queue.get_and_update().kind().index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing shapes: {:?}", seen);
    }

    #[test]
    fn test_drawn_block_is_reset() {
        let mut queue = BlockQueue::new(3);
        let block = queue.get_and_update();
        assert_eq!(block, Block::new(block.kind()));
    }
}
