//! Concurrent bounded LRU cache for tree nodes
//! 树节点的并发有界 LRU 缓存
//!
//! # Features
//! 特性
//!
//! - `lru`: [`Lru`] - lock-free key index + locked recency list
//! - `lock`: [`LockLru`] - single mutex around `hashlink::LruCache`
//! - `no`: [`NoCache`] - zero overhead no-op
//!
//! Capacity counts nodes, not bytes.
//! 容量按节点数计，而非字节数。

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::Arc;

mod list;

pub use list::{Handle, Iter, List};

#[cfg(feature = "lru")]
mod lru;

#[cfg(feature = "lock")]
mod lock_lru;

#[cfg(feature = "no")]
mod no;

#[cfg(feature = "lock")]
pub use lock_lru::LockLru;
#[cfg(feature = "lru")]
pub use lru::Lru;
#[cfg(feature = "no")]
pub use no::NoCache;

/// Cacheable node, identified by its key bytes
/// 可缓存节点，以键字节标识
pub trait Node {
  fn key(&self) -> &[u8];
}

impl<N: Node + ?Sized> Node for Arc<N> {
  #[inline(always)]
  fn key(&self) -> &[u8] {
    (**self).key()
  }
}

impl<N: Node + ?Sized> Node for Box<N> {
  #[inline(always)]
  fn key(&self) -> &[u8] {
    (**self).key()
  }
}

impl<N: Node + ?Sized> Node for &N {
  #[inline(always)]
  fn key(&self) -> &[u8] {
    (**self).key()
  }
}

impl Node for [u8] {
  #[inline(always)]
  fn key(&self) -> &[u8] {
    self
  }
}

impl Node for Vec<u8> {
  #[inline(always)]
  fn key(&self) -> &[u8] {
    self
  }
}

/// Node cache, shared across threads
/// 节点缓存，可跨线程共享
///
/// # Complexity
/// 复杂度
///
/// - add / get / has / rm / len: O(1)
/// - drain: O(n)
pub trait Cache<N: Node>: Send + Sync {
  /// Insert or replace by key. Returns previous node on replace,
  /// evicted node on overflow, otherwise None
  /// 按键插入或替换。替换时返回旧节点，溢出时返回被淘汰节点，否则 None
  fn add(&self, node: Arc<N>) -> Option<Arc<N>>;

  /// Get and mark most recently used
  /// 获取并标记为最近使用
  fn get(&self, key: &[u8]) -> Option<Arc<N>>;

  /// Get without touching recency
  /// 获取但不改变使用顺序
  fn peek(&self, key: &[u8]) -> Option<Arc<N>>;

  /// Membership check, no promotion
  /// 存在性检查，不提升
  fn has(&self, key: &[u8]) -> bool;

  /// Remove by key
  /// 按键删除
  fn rm(&self, key: &[u8]) -> Option<Arc<N>>;

  fn len(&self) -> usize;

  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Max node count, fixed at creation
  /// 最大节点数，创建时固定
  fn cap(&self) -> usize;

  /// Remove all, most recent first
  /// 清空，按最近使用在前返回
  fn drain(&self) -> Vec<Arc<N>>;
}
