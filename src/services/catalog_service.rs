//! 课程目录服务 - 业务能力层
//!
//! 只负责课程的浏览与定位；分页是纯偏移切片，无并发、无缓存

use std::sync::Arc;

use tracing::info;

use crate::clients::ContentClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::course::Course;
use crate::session::SessionContext;

/// 课程目录服务
pub struct CatalogService {
    client: ContentClient,
}

impl CatalogService {
    /// 创建新的目录服务
    pub fn new(config: &Config, session: Arc<SessionContext>) -> Self {
        Self {
            client: ContentClient::new(config, session),
        }
    }

    /// 获取全部课程
    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        let courses = self.client.list_courses().await?;
        info!("✓ 目录加载完成，共 {} 门课程", courses.len());
        Ok(courses)
    }

    /// 获取单个课程
    pub async fn find_course(&self, course_id: u32) -> AppResult<Course> {
        self.client.get_course(course_id).await
    }
}

/// 按页切片（page 从 0 起，偏移 = page * page_size）
///
/// 越界页返回空切片，不报错
pub fn slice_page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_page_offsets() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(slice_page(&items, 0, 4), &[0, 1, 2, 3]);
        assert_eq!(slice_page(&items, 1, 4), &[4, 5, 6, 7]);
        // 末页不满
        assert_eq!(slice_page(&items, 2, 4), &[8, 9]);
    }

    #[test]
    fn slice_page_out_of_range_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(slice_page(&items, 5, 4).is_empty());
        assert!(slice_page(&items, 0, 0).is_empty());
        assert!(slice_page::<u32>(&[], 0, 4).is_empty());
    }
}
