use ansel_composing_source::COMPOSITION_PAIRS;

lazy_static! {
    static ref COMPOSITION_TABLE: (Vec<u64>, Vec<u64>) = compositions();
    pub static ref COMPOSITION_TABLE_MARKS: &'static Vec<u64> = &self::COMPOSITION_TABLE.0;
    pub static ref COMPOSITION_TABLE_PAIRS: &'static Vec<u64> = &self::COMPOSITION_TABLE.1;
}

/// "запеченные" композиции - записи знаков и общий массив пар
///
/// формат записи знака:
/// ____ ____  ____ ____    ____ ____  zzzz zzzz    yyyy yyyy  yyyy yyxx    xxxx xxxx  xxxx xxxx
/// где:
///     xx.. - диакритический знак
///     yy.. - индекс первой пары знака в таблице пар (см. MarkInfo)
///     zz.. - количество пар знака
///
/// формат записи пары:
/// ____ ____  ____ ____    ____ ____  ____ yyyy    yyyy yyyy  yyyy yyxx    xxxx xxxx  xxxx xxxx
/// где:
///     xx.. - базовый символ
///     yy.. - прекомпозиция
fn compositions() -> (Vec<u64>, Vec<u64>)
{
    let mut marks = Vec::new();
    let mut pairs = Vec::new();

    let mut mark_codes: Vec<&u32> = COMPOSITION_PAIRS.keys().collect();
    mark_codes.sort();

    // таблица записей для каждого знака - базовый символ, с которым он комбинируется, результат
    for mark in mark_codes {
        let bases = &COMPOSITION_PAIRS[mark];

        let mut base_codes: Vec<&u32> = bases.keys().collect();
        base_codes.sort();

        let info = MarkInfo {
            index: pairs.len() as u16,
            count: base_codes.len() as u8,
        };

        marks.push(*mark as u64 | (info.bake() as u64) << 18);

        for base in base_codes {
            // в значении нужно хранить:
            // 1. базовый символ
            // 2. результирующий кодпоинт
            let composed = bases.get(base).unwrap();
            let value = (*base as u64) | ((*composed as u64) << 18);

            pairs.push(value);
        }
    }

    (marks, pairs)
}

/// информация о хранимых парах для знака
#[derive(Default)]
pub struct MarkInfo
{
    /// индекс первой пары знака в таблице пар
    pub index: u16,
    /// количество пар знака
    pub count: u8,
}

impl MarkInfo
{
    /// информация о хранимых парах в сжатом виде:
    ///   [zzzz zzzz] [yy yyyy yyyy yyyy]
    ///      8 бит          14 бит
    ///        \               \---------- индекс в таблице пар
    ///         \------------------------- количество пар
    pub fn bake(&self) -> u32
    {
        assert!(self.index <= 0x3FFF);

        (self.index as u32) | ((self.count as u32) << 14)
    }
}
