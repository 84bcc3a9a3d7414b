use base64::Engine;

use crate::config::FormatterConfig;
use crate::error::FormatError;

use super::models::{AnimalWithImages, FormattedAnimal};

/// 将单张图片的原始字节编码为标准 base64（标准字母表、含填充）。
pub fn encode_image(image_data: &[u8]) -> String {
    base64::prelude::BASE64_STANDARD.encode(image_data)
}

/// 动物图片格式化器：把仓储记录中的原始图片字节转换为可传输的 base64 文本。
///
/// 纯函数语义：只借用输入，不做 I/O，不修改源记录；相同输入总是得到相同输出。
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalFormatter {
    /// 单张图片字节上限（None=不限制）
    max_image_bytes: Option<usize>,
}

impl AnimalFormatter {
    pub fn new(max_image_bytes: Option<usize>) -> Self {
        Self { max_image_bytes }
    }

    pub fn from_config(cfg: &FormatterConfig) -> Self {
        Self::new(cfg.image_limit())
    }

    /// 批量格式化：输出与输入等长且顺序一致，每条记录的 `images` 与原图片一一对应。
    ///
    /// 任一图片超过上限时立即失败，不会产出部分结果。
    pub fn format_animals_with_images(
        &self,
        animals: &[AnimalWithImages],
    ) -> Result<Vec<FormattedAnimal>, FormatError> {
        animals
            .iter()
            .map(|animal| self.format_animal(animal))
            .collect()
    }

    fn format_animal(&self, record: &AnimalWithImages) -> Result<FormattedAnimal, FormatError> {
        let mut images = Vec::with_capacity(record.images.len());
        for (position, image) in record.images.iter().enumerate() {
            if let Some(limit) = self.max_image_bytes
                && image.image_data.len() > limit
            {
                return Err(FormatError::ImageTooLarge {
                    animal_id: record.animal.id.clone(),
                    position,
                    size: image.image_data.len(),
                    limit,
                });
            }
            images.push(encode_image(&image.image_data));
        }
        Ok(FormattedAnimal {
            animal: record.animal.clone(),
            images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::animal::models::Animal;

    fn dog(images: &[&str]) -> AnimalWithImages {
        images.iter().fold(
            AnimalWithImages::new(Animal::new("u1", "Rex", "dog", "male")),
            |acc, raw| acc.with_image(raw.as_bytes().to_vec()),
        )
    }

    #[test]
    fn encode_image_uses_standard_alphabet_with_padding() {
        assert_eq!(encode_image(b""), "");
        assert_eq!(encode_image(b"f"), "Zg==");
        assert_eq!(encode_image(b"fo"), "Zm8=");
        assert_eq!(encode_image(b"foo"), "Zm9v");
        // 0xfb 0xff 在 URL-safe 字母表下会得到 "-_8="
        assert_eq!(encode_image(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn zero_images_yield_empty_list() {
        let out = AnimalFormatter::default()
            .format_animals_with_images(&[dog(&[])])
            .unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].images.is_empty());

        let v = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(v["images"], serde_json::json!([]));
    }

    #[test]
    fn non_image_fields_are_copied_unchanged() {
        let input = dog(&["abc"]);
        let out = AnimalFormatter::default()
            .format_animals_with_images(std::slice::from_ref(&input))
            .unwrap();
        assert_eq!(out[0].animal, input.animal);
        assert_eq!(out[0].images, vec!["YWJj".to_string()]);
    }

    #[test]
    fn oversize_image_fails_fast_with_position() {
        let input = dog(&["ok", "way too large"]);
        let err = AnimalFormatter::new(Some(4))
            .format_animals_with_images(std::slice::from_ref(&input))
            .unwrap_err();
        assert_eq!(
            err,
            FormatError::ImageTooLarge {
                animal_id: input.animal.id.clone(),
                position: 1,
                size: 13,
                limit: 4,
            }
        );
    }

    #[test]
    fn image_exactly_at_limit_is_accepted() {
        let out = AnimalFormatter::new(Some(3))
            .format_animals_with_images(&[dog(&["abc"])])
            .unwrap();
        assert_eq!(out[0].images, vec!["YWJj".to_string()]);
    }
}
