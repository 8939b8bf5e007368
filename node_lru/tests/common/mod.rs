//! Shared test node / 共享测试节点

#![allow(dead_code)]

use std::sync::Arc;

use node_lru::Node;

/// Tree node stand-in: key bytes plus a version
/// 树节点替身：键字节加版本号
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
  pub key: Vec<u8>,
  pub ver: u32,
}

impl Node for TreeNode {
  fn key(&self) -> &[u8] {
    &self.key
  }
}

pub fn node(key: impl AsRef<[u8]>, ver: u32) -> Arc<TreeNode> {
  Arc::new(TreeNode {
    key: key.as_ref().to_vec(),
    ver,
  })
}

/// (key, ver) view for assertions
/// 断言用的 (键, 版本) 视图
pub fn kv(n: Option<Arc<TreeNode>>) -> Option<(Vec<u8>, u32)> {
  n.map(|n| (n.key.clone(), n.ver))
}
