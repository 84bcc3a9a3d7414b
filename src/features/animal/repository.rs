use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RepositoryError;

use super::models::{AnimalWithImages, AvailableAnimalsQuery};

/// 动物数据访问接口（由持久化层实现）。
///
/// 过滤语义（精确匹配 / 子串匹配、排序）由实现方负责，服务层只做透传。
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// 查询可领养且不属于 `query.user_id` 的动物，并按可选条件过滤。
    async fn find_all_available_not_from_user(
        &self,
        query: &AvailableAnimalsQuery,
    ) -> Result<Vec<AnimalWithImages>, RepositoryError>;

    /// 查询指定用户发布的全部动物。
    async fn find_all_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<AnimalWithImages>, RepositoryError>;
}

/// 服务间共享的仓储句柄
pub type SharedAnimalRepository = Arc<dyn AnimalRepository>;
