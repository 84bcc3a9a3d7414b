use std::sync::Arc;

use crate::config::AppConfig;
use crate::features::animal::{
    AnimalFormatter, AnimalRepository, GetAvailableAnimalsService, GetUserAnimalsService,
    SharedAnimalRepository,
};

/// 聚合的动物查询服务（进程级默认实例在启动时显式构造一次）
#[derive(Clone)]
pub struct AnimalServices {
    pub get_available: GetAvailableAnimalsService,
    pub get_user: GetUserAnimalsService,
}

impl AnimalServices {
    /// 两个服务共享同一个仓储与格式化器
    pub fn new(repository: SharedAnimalRepository, formatter: AnimalFormatter) -> Self {
        Self {
            get_available: GetAvailableAnimalsService::new(repository.clone(), formatter),
            get_user: GetUserAnimalsService::new(repository, formatter),
        }
    }

    pub fn from_config<R>(repository: R, config: &AppConfig) -> Self
    where
        R: AnimalRepository + 'static,
    {
        Self::new(
            Arc::new(repository),
            AnimalFormatter::from_config(&config.formatter),
        )
    }
}
