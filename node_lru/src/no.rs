//! NoCache - zero overhead no-op cache
//! NoCache - 零开销空操作缓存
//!
//! # Complexity
//! 复杂度
//!
//! - add: O(1) - hands the node back, as if evicted
//! - get / peek / rm: O(1) - always None
//! - has: O(1) - always false
//!
//! Useful for disabling cache without touching call sites.
//! 用于在不改动调用方的情况下禁用缓存。

use std::sync::Arc;

use crate::{Cache, Node};

/// No-op cache, behaves like capacity 0
/// 空操作缓存，行为等同容量 0
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl<N: Node> Cache<N> for NoCache {
  #[inline(always)]
  fn add(&self, node: Arc<N>) -> Option<Arc<N>> {
    Some(node)
  }

  #[inline(always)]
  fn get(&self, _: &[u8]) -> Option<Arc<N>> {
    None
  }

  #[inline(always)]
  fn peek(&self, _: &[u8]) -> Option<Arc<N>> {
    None
  }

  #[inline(always)]
  fn has(&self, _: &[u8]) -> bool {
    false
  }

  #[inline(always)]
  fn rm(&self, _: &[u8]) -> Option<Arc<N>> {
    None
  }

  #[inline(always)]
  fn len(&self) -> usize {
    0
  }

  #[inline(always)]
  fn cap(&self) -> usize {
    0
  }

  #[inline(always)]
  fn drain(&self) -> Vec<Arc<N>> {
    Vec::new()
  }
}
