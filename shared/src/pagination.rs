//! 分页响应
//!
//! A page of derived view data plus the numbers needed to draw the pager.

use serde::{Deserialize, Serialize};

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// 数据列表
    pub data: Vec<T>,
    /// 总记录数
    pub total: u64,
    /// 当前页码 (从 1 开始)
    pub page: u32,
    /// 每页数量
    pub limit: u32,
    /// 总页数 (至少 1 页，即使没有记录)
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            data,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `ceil(total / limit)`, never less than one page
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    (total.div_ceil(limit as u64) as u32).max(1)
}
