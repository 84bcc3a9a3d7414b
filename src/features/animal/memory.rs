use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::RepositoryError;

use super::models::{AnimalWithImages, AvailableAnimalsQuery};
use super::repository::AnimalRepository;

/// 基于内存的动物仓储，供本地诊断工具与测试使用。
///
/// - 可领养：`available == true` 且发布者不是请求者
/// - `gender` / `type`：忽略大小写的精确匹配
/// - `name`：忽略大小写的子串匹配
/// - 结果按 `createdAt` 倒序，时间相同时按 `id` 升序
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: RwLock<Vec<AnimalWithImages>>,
}

impl InMemoryAnimalRepository {
    pub fn new(animals: Vec<AnimalWithImages>) -> Self {
        Self {
            animals: RwLock::new(animals),
        }
    }

    /// 从 JSON 夹具（`AnimalWithImages` 数组）加载。
    pub async fn from_json_file(path: &Path) -> Result<Self, RepositoryError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| RepositoryError::Fixture(format!("read {}: {e}", path.display())))?;
        let animals: Vec<AnimalWithImages> = serde_json::from_slice(&raw)
            .map_err(|e| RepositoryError::Fixture(format!("parse {}: {e}", path.display())))?;
        tracing::debug!(
            target: "pet_adoption_backend::animal",
            "loaded {} animals from {}",
            animals.len(),
            path.display()
        );
        Ok(Self::new(animals))
    }

    pub async fn insert(&self, animal: AnimalWithImages) {
        self.animals.write().await.push(animal);
    }

    pub async fn len(&self) -> usize {
        self.animals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.animals.read().await.is_empty()
    }
}

fn eq_ignore_case(filter: Option<&str>, value: &str) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => value.to_lowercase() == f.to_lowercase(),
        None => true,
    }
}

fn contains_ignore_case(filter: Option<&str>, value: &str) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => value.to_lowercase().contains(&f.to_lowercase()),
        None => true,
    }
}

fn sort_newest_first(animals: &mut [AnimalWithImages]) {
    animals.sort_by(|a, b| {
        b.animal
            .created_at
            .cmp(&a.animal.created_at)
            .then_with(|| a.animal.id.cmp(&b.animal.id))
    });
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn find_all_available_not_from_user(
        &self,
        query: &AvailableAnimalsQuery,
    ) -> Result<Vec<AnimalWithImages>, RepositoryError> {
        let guard = self.animals.read().await;
        let mut hits: Vec<AnimalWithImages> = guard
            .iter()
            .filter(|r| r.animal.available && r.animal.user_id != query.user_id)
            .filter(|r| eq_ignore_case(query.gender.as_deref(), &r.animal.gender))
            .filter(|r| eq_ignore_case(query.kind.as_deref(), &r.animal.kind))
            .filter(|r| contains_ignore_case(query.name.as_deref(), &r.animal.name))
            .cloned()
            .collect();
        drop(guard);
        sort_newest_first(&mut hits);
        Ok(hits)
    }

    async fn find_all_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<AnimalWithImages>, RepositoryError> {
        let guard = self.animals.read().await;
        let mut hits: Vec<AnimalWithImages> = guard
            .iter()
            .filter(|r| r.animal.user_id == user_id)
            .cloned()
            .collect();
        drop(guard);
        sort_newest_first(&mut hits);
        Ok(hits)
    }
}
