//! 图片格式化的性质测试：长度/顺序保持、逐张编码一致、确定性与不修改输入。

use base64::Engine;
use proptest::prelude::*;

use pet_adoption_backend::features::animal::{
    Animal, AnimalFormatter, AnimalWithImages, encode_image,
};

/// 生成任意动物记录（0..5 张图片，每张 0..64 字节）
fn arb_animal() -> impl Strategy<Value = AnimalWithImages> {
    (
        prop::string::string_regex("u[0-9]{1,3}").unwrap(),
        prop::string::string_regex("[A-Za-z]{1,12}").unwrap(),
        prop_oneof![Just("dog"), Just("cat"), Just("bird")],
        prop_oneof![Just("male"), Just("female")],
        any::<bool>(),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..5),
    )
        .prop_map(|(user_id, name, kind, gender, available, images)| {
            let mut animal = Animal::new(user_id, name, kind, gender);
            animal.available = available;
            images
                .into_iter()
                .fold(AnimalWithImages::new(animal), |acc, bytes| acc.with_image(bytes))
        })
}

proptest! {
    #[test]
    fn output_preserves_length_and_order(animals in prop::collection::vec(arb_animal(), 0..8)) {
        let out = AnimalFormatter::default().format_animals_with_images(&animals).unwrap();
        prop_assert_eq!(out.len(), animals.len());
        for (formatted, source) in out.iter().zip(animals.iter()) {
            prop_assert_eq!(&formatted.animal, &source.animal);
            prop_assert_eq!(formatted.images.len(), source.images.len());
        }
    }

    #[test]
    fn each_image_is_standard_base64_of_its_payload(animal in arb_animal()) {
        let out = AnimalFormatter::default()
            .format_animals_with_images(std::slice::from_ref(&animal))
            .unwrap();
        for (encoded, raw) in out[0].images.iter().zip(animal.images.iter()) {
            prop_assert_eq!(encoded, &base64::prelude::BASE64_STANDARD.encode(&raw.image_data));
            let decoded = base64::prelude::BASE64_STANDARD.decode(encoded).unwrap();
            prop_assert_eq!(&decoded, &raw.image_data);
        }
    }

    #[test]
    fn encoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(encode_image(&bytes), encode_image(&bytes));
    }

    #[test]
    fn formatting_never_mutates_input(animals in prop::collection::vec(arb_animal(), 0..6)) {
        let snapshot = animals.clone();
        let formatter = AnimalFormatter::default();
        let first = formatter.format_animals_with_images(&animals).unwrap();
        let second = formatter.format_animals_with_images(&animals).unwrap();
        prop_assert_eq!(&animals, &snapshot);
        prop_assert_eq!(first, second);
    }
}
