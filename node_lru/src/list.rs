//! Arena-backed doubly linked recency list
//! 基于 arena 的双向链表，记录使用顺序
//!
//! Front = most recently used, back = least recently used.
//! 头部 = 最近使用，尾部 = 最久未使用。
//!
//! Freed slots are recycled via a free list. Each slot carries a generation,
//! bumped on free, so a [`Handle`] to a removed node is rejected rather than
//! aliasing whatever reuses the slot.
//! 空闲槽位通过空闲链表复用。每个槽位带代数，释放时递增，
//! 因此指向已删除节点的 [`Handle`] 会被拒绝，而不会误指复用的槽位。

const NIL: u32 = u32::MAX;

/// Revocable position of one node in a [`List`]
/// [`List`] 中某节点的可撤销位置
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
  idx: u32,
  generation: u32,
}

struct Slot<T> {
  val: Option<T>,
  prev: u32,
  next: u32,
  generation: u32,
}

/// Doubly linked list with O(1) push / move / remove
/// O(1) 插入 / 移动 / 删除的双向链表
pub struct List<T> {
  slots: Vec<Slot<T>>,
  free: Vec<u32>,
  head: u32,
  tail: u32,
  len: usize,
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> List<T> {
  pub const fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: Vec::new(),
      head: NIL,
      tail: NIL,
      len: 0,
    }
  }

  pub fn with_capacity(cap: usize) -> Self {
    Self {
      slots: Vec::with_capacity(cap),
      ..Self::new()
    }
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Slot index if handle is still live
  /// 句柄仍有效时返回槽位下标
  #[inline(always)]
  fn live(&self, h: Handle) -> Option<usize> {
    let i = h.idx as usize;
    match self.slots.get(i) {
      Some(s) if s.generation == h.generation && s.val.is_some() => Some(i),
      _ => None,
    }
  }

  /// Insert at front
  /// 插入头部
  pub fn push_front(&mut self, val: T) -> Handle {
    let idx = match self.free.pop() {
      Some(idx) => {
        let s = &mut self.slots[idx as usize];
        s.val = Some(val);
        s.prev = NIL;
        s.next = NIL;
        idx
      }
      None => {
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
          val: Some(val),
          prev: NIL,
          next: NIL,
          generation: 0,
        });
        idx
      }
    };
    self.link_front(idx);
    self.len += 1;
    Handle {
      idx,
      generation: self.slots[idx as usize].generation,
    }
  }

  /// Move to front, false if handle is stale
  /// 移到头部，句柄失效时返回 false
  pub fn move_front(&mut self, h: Handle) -> bool {
    let Some(i) = self.live(h) else {
      return false;
    };
    if self.head != h.idx {
      self.unlink(i);
      self.link_front(h.idx);
    }
    true
  }

  #[inline]
  pub fn get(&self, h: Handle) -> Option<&T> {
    self.live(h).and_then(|i| self.slots[i].val.as_ref())
  }

  #[inline]
  pub fn get_mut(&mut self, h: Handle) -> Option<&mut T> {
    self.live(h).and_then(|i| self.slots[i].val.as_mut())
  }

  /// Remove node, revoking its handle
  /// 删除节点并撤销其句柄
  pub fn rm(&mut self, h: Handle) -> Option<T> {
    let i = self.live(h)?;
    self.unlink(i);
    let s = &mut self.slots[i];
    s.generation = s.generation.wrapping_add(1);
    let val = s.val.take();
    self.free.push(h.idx);
    self.len -= 1;
    val
  }

  /// Handle of least recently used node
  /// 最久未使用节点的句柄
  #[inline]
  pub fn back(&self) -> Option<Handle> {
    (self.tail != NIL).then(|| Handle {
      idx: self.tail,
      generation: self.slots[self.tail as usize].generation,
    })
  }

  pub fn pop_back(&mut self) -> Option<T> {
    let h = self.back()?;
    self.rm(h)
  }

  /// Iterate front to back
  /// 从头到尾遍历
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      list: self,
      cur: self.head,
    }
  }

  /// Drop all nodes; every outstanding handle is revoked
  /// 清空所有节点，所有已发出的句柄失效
  pub fn clear(&mut self) {
    self.free.clear();
    for (i, s) in self.slots.iter_mut().enumerate() {
      if s.val.take().is_some() {
        s.generation = s.generation.wrapping_add(1);
      }
      s.prev = NIL;
      s.next = NIL;
      self.free.push(i as u32);
    }
    self.head = NIL;
    self.tail = NIL;
    self.len = 0;
  }

  fn link_front(&mut self, idx: u32) {
    let old = self.head;
    {
      let s = &mut self.slots[idx as usize];
      s.prev = NIL;
      s.next = old;
    }
    if old == NIL {
      self.tail = idx;
    } else {
      self.slots[old as usize].prev = idx;
    }
    self.head = idx;
  }

  fn unlink(&mut self, i: usize) {
    let (prev, next) = {
      let s = &self.slots[i];
      (s.prev, s.next)
    };
    if prev == NIL {
      self.head = next;
    } else {
      self.slots[prev as usize].next = next;
    }
    if next == NIL {
      self.tail = prev;
    } else {
      self.slots[next as usize].prev = prev;
    }
    let s = &mut self.slots[i];
    s.prev = NIL;
    s.next = NIL;
  }
}

pub struct Iter<'a, T> {
  list: &'a List<T>,
  cur: u32,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    if self.cur == NIL {
      return None;
    }
    let s = &self.list.slots[self.cur as usize];
    self.cur = s.next;
    s.val.as_ref()
  }
}
