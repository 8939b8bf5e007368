//! LRU cache with lock-free key index
//! 键索引无锁的 LRU 缓存
//!
//! # Complexity
//! 复杂度
//!
//! - add / get / peek / rm / len: O(1)
//! - has: O(1), lock-free
//!
//! Key index is a `papaya::HashMap` from key bytes to list [`Handle`]; the
//! recency [`List`] sits behind a `parking_lot::Mutex`. A miss or a `has`
//! never touches the mutex. Every index write happens with the mutex held,
//! and a handle read outside the mutex is never used: locked paths re-read it.
//! 键索引为 `papaya::HashMap`（键字节 → 链表 [`Handle`]），使用顺序链表
//! [`List`] 由 `parking_lot::Mutex` 保护。未命中和 `has` 不会加锁。
//! 所有索引写入都在持锁时进行，锁外读到的句柄从不使用，持锁路径会重新读取。

use std::{mem, sync::Arc};

use log::{error, trace};
use papaya::HashMap;
use parking_lot::Mutex;

use crate::{Cache, Handle, List, Node};

/// Bounded LRU node cache
/// 有界 LRU 节点缓存
pub struct Lru<N> {
  index: HashMap<Box<[u8]>, Handle>,
  list: Mutex<List<Arc<N>>>,
  max: usize,
}

impl<N> Lru<N> {
  /// Create with max node count. 0 is allowed: every new node is evicted at once
  /// 创建，指定最大节点数。允许 0：每个新节点会被立即淘汰
  pub fn new(max: usize) -> Self {
    Self {
      index: HashMap::new(),
      list: Mutex::new(List::new()),
      max,
    }
  }

  /// Live handle for key; `list` is the locked list
  /// 键对应的有效句柄；`list` 为已加锁的链表
  fn handle(&self, list: &List<Arc<N>>, key: &[u8]) -> Option<Handle> {
    let h = *self.index.pin().get(key)?;
    if list.get(h).is_some() {
      return Some(h);
    }
    debug_assert!(false, "index holds revoked handle");
    error!("node_lru: index holds revoked handle, key {} bytes", key.len());
    None
  }
}

impl<N: Node + Send + Sync> Cache<N> for Lru<N> {
  fn add(&self, node: Arc<N>) -> Option<Arc<N>> {
    let mut list = self.list.lock();

    if let Some(h) = self.handle(&list, node.key()) {
      list.move_front(h);
      return list.get_mut(h).map(|slot| mem::replace(slot, node));
    }

    let key: Box<[u8]> = node.key().into();
    let h = list.push_front(node);
    let index = self.index.pin();
    index.insert(key, h);

    if list.len() <= self.max {
      return None;
    }
    let old = list.pop_back()?;
    index.remove(old.key());
    trace!("node_lru: evict, len {} max {}", list.len(), self.max);
    Some(old)
  }

  fn get(&self, key: &[u8]) -> Option<Arc<N>> {
    // Miss fast path, no lock
    // 未命中快速路径，不加锁
    if !self.index.pin().contains_key(key) {
      return None;
    }
    let mut list = self.list.lock();
    let h = self.handle(&list, key)?;
    list.move_front(h);
    list.get(h).cloned()
  }

  fn peek(&self, key: &[u8]) -> Option<Arc<N>> {
    if !self.index.pin().contains_key(key) {
      return None;
    }
    let list = self.list.lock();
    let h = self.handle(&list, key)?;
    list.get(h).cloned()
  }

  #[inline]
  fn has(&self, key: &[u8]) -> bool {
    self.index.pin().contains_key(key)
  }

  fn rm(&self, key: &[u8]) -> Option<Arc<N>> {
    let mut list = self.list.lock();
    let h = self.handle(&list, key)?;
    self.index.pin().remove(key);
    list.rm(h)
  }

  fn len(&self) -> usize {
    self.list.lock().len()
  }

  #[inline(always)]
  fn cap(&self) -> usize {
    self.max
  }

  fn drain(&self) -> Vec<Arc<N>> {
    let mut list = self.list.lock();
    let all: Vec<_> = list.iter().cloned().collect();
    list.clear();
    self.index.pin().clear();
    all
  }
}
