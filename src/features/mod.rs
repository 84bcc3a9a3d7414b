/// 动物查询：可领养列表、本人发布列表与图片格式化
pub mod animal;
