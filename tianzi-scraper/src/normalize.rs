//! Name normalization for storage paths.
//!
//! Ruler names on the source wiki are written in traditional Chinese while
//! the output tree is indexed in simplified Chinese. The converter is an
//! injectable callback so callers can plug in a full-table converter or an
//! identity function; the built-in table covers the characters that appear
//! in dynasty labels and ruler names.

use std::sync::Arc;

/// Converts a display name into the canonical script used for filenames.
pub type NameNormalizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Built-in traditional-to-simplified Chinese normalizer.
pub fn simplified_chinese() -> NameNormalizer {
    Arc::new(|text| to_simplified(text))
}

/// Identity normalizer for pre-normalized sources and tests.
pub fn identity() -> NameNormalizer {
    Arc::new(|text| text.to_string())
}

/// Character-by-character traditional→simplified mapping. Characters not in
/// the table pass through unchanged.
pub fn to_simplified(text: &str) -> String {
    text.chars()
        .map(|c| {
            T2S_TABLE
                .iter()
                .find(|&&(trad, _)| trad == c)
                .map(|&(_, simp)| simp)
                .unwrap_or(c)
        })
        .collect()
}

/// Traditional→simplified pairs for characters seen in dynasty labels,
/// temple names, posthumous names and personal names of Chinese rulers.
const T2S_TABLE: &[(char, char)] = &[
    ('漢', '汉'),
    ('劉', '刘'),
    ('陳', '陈'),
    ('楊', '杨'),
    ('趙', '赵'),
    ('錢', '钱'),
    ('孫', '孙'),
    ('吳', '吴'),
    ('鄭', '郑'),
    ('馬', '马'),
    ('張', '张'),
    ('黃', '黄'),
    ('齊', '齐'),
    ('晉', '晋'),
    ('遼', '辽'),
    ('後', '后'),
    ('獻', '献'),
    ('靈', '灵'),
    ('懷', '怀'),
    ('順', '顺'),
    ('莊', '庄'),
    ('嚴', '严'),
    ('簡', '简'),
    ('釐', '厘'),
    ('閔', '闵'),
    ('釗', '钊'),
    ('禕', '祎'),
    ('聰', '聪'),
    ('淵', '渊'),
    ('儀', '仪'),
    ('載', '载'),
    ('顒', '颙'),
    ('燁', '烨'),
    ('臨', '临'),
    ('煬', '炀'),
    ('廣', '广'),
    ('堅', '坚'),
    ('慶', '庆'),
    ('豐', '丰'),
    ('緒', '绪'),
    ('統', '统'),
    ('國', '国'),
    ('號', '号'),
    ('廟', '庙'),
    ('諡', '谥'),
    ('東', '东'),
    ('萬', '万'),
    ('曆', '历'),
    ('歷', '历'),
    ('啟', '启'),
    ('啓', '启'),
    ('禎', '祯'),
    ('檢', '检'),
    ('構', '构'),
    ('顯', '显'),
    ('頊', '顼'),
    ('嚳', '喾'),
    ('堯', '尧'),
    ('發', '发'),
    ('誦', '诵'),
    ('滿', '满'),
    ('閏', '闰'),
    ('靜', '静'),
    ('貴', '贵'),
    ('義', '义'),
    ('壽', '寿'),
    ('榮', '荣'),
    ('華', '华'),
    ('雲', '云'),
    ('龍', '龙'),
    ('鳳', '凤'),
    ('麗', '丽'),
    ('寧', '宁'),
    ('愛', '爱'),
    ('覺', '觉'),
    ('羅', '罗'),
    ('爾', '尔'),
    ('極', '极'),
    ('紹', '绍'),
    ('徹', '彻'),
    ('彊', '强'),
];
