//! LRU cache behind a single mutex
//! 单互斥锁保护的 LRU 缓存
//!
//! # Complexity
//! 复杂度
//!
//! - add / get / peek / has / rm / len: O(1)
//!
//! Based on hashlink::LruCache. Same observable behavior as [`crate::Lru`],
//! every call takes the lock. Fits when contention is low.
//! 基于 hashlink::LruCache。行为与 [`crate::Lru`] 相同，每次调用都加锁。
//! 适合低竞争场景。

use std::sync::Arc;

use hashlink::LruCache;
use log::trace;
use parking_lot::Mutex;

use crate::{Cache, Node};

/// Bounded LRU node cache, uniform lock
/// 有界 LRU 节点缓存，统一加锁
pub struct LockLru<N> {
  // Unbounded inner cache, eviction done here to hand back the evicted node
  // 内部缓存不设上限，在此淘汰以返回被淘汰节点
  inner: Mutex<LruCache<Box<[u8]>, Arc<N>>>,
  max: usize,
}

impl<N> LockLru<N> {
  /// Create with max node count
  /// 创建，指定最大节点数
  pub fn new(max: usize) -> Self {
    Self {
      inner: Mutex::new(LruCache::new_unbounded()),
      max,
    }
  }
}

impl<N: Node + Send + Sync> Cache<N> for LockLru<N> {
  fn add(&self, node: Arc<N>) -> Option<Arc<N>> {
    let mut inner = self.inner.lock();
    if let Some(slot) = inner.get_mut(node.key()) {
      return Some(std::mem::replace(slot, node));
    }
    inner.insert(node.key().into(), node);
    if inner.len() <= self.max {
      return None;
    }
    let (_, old) = inner.remove_lru()?;
    trace!("node_lru: evict, len {} max {}", inner.len(), self.max);
    Some(old)
  }

  #[inline]
  fn get(&self, key: &[u8]) -> Option<Arc<N>> {
    self.inner.lock().get(key).cloned()
  }

  #[inline]
  fn peek(&self, key: &[u8]) -> Option<Arc<N>> {
    self.inner.lock().peek(key).cloned()
  }

  #[inline]
  fn has(&self, key: &[u8]) -> bool {
    self.inner.lock().contains_key(key)
  }

  #[inline]
  fn rm(&self, key: &[u8]) -> Option<Arc<N>> {
    self.inner.lock().remove(key)
  }

  #[inline]
  fn len(&self) -> usize {
    self.inner.lock().len()
  }

  #[inline(always)]
  fn cap(&self) -> usize {
    self.max
  }

  fn drain(&self) -> Vec<Arc<N>> {
    let mut inner = self.inner.lock();
    // hashlink iterates least recent first
    // hashlink 按最久未使用在前遍历
    let mut all: Vec<_> = inner.iter().map(|(_, v)| v.clone()).collect();
    all.reverse();
    inner.clear();
    all
  }
}
